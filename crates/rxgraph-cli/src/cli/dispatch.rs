//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dot::DotArgs;
use crate::commands::tables::TablesArgs;

pub struct DotParams {
    pub graph_path: PathBuf,
    pub root: Option<String>,
    pub label: Option<String>,
    pub ignore_case: bool,
    pub dispatch_tables: bool,
    pub output: Option<PathBuf>,
}

impl DotParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: graph_path(m),
            root: m.get_one::<String>("root").cloned(),
            label: m.get_one::<String>("label").cloned(),
            ignore_case: m.get_flag("ignore_case"),
            dispatch_tables: m.get_flag("dispatch_tables"),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<DotParams> for DotArgs {
    fn from(p: DotParams) -> Self {
        Self {
            graph_path: p.graph_path,
            root: p.root,
            label: p.label,
            ignore_case: p.ignore_case,
            dispatch_tables: p.dispatch_tables,
            output: p.output,
        }
    }
}

pub struct TablesParams {
    pub graph_path: PathBuf,
    pub root: Option<String>,
    pub ignore_case: bool,
    pub color: ColorChoice,
}

impl TablesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: graph_path(m),
            root: m.get_one::<String>("root").cloned(),
            ignore_case: m.get_flag("ignore_case"),
            color: parse_color(m),
        }
    }
}

impl From<TablesParams> for TablesArgs {
    fn from(p: TablesParams) -> Self {
        Self {
            graph_path: p.graph_path,
            root: p.root,
            ignore_case: p.ignore_case,
            color: p.color.should_colorize(),
        }
    }
}

/// Required positional; clap rejects invocations without it.
fn graph_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("graph_path")
        .cloned()
        .unwrap_or_else(|| unreachable!("clap should have caught this"))
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
