//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Graph description file (positional, "-" for stdin).
pub fn graph_path_arg() -> Arg {
    Arg::new("graph_path")
        .value_name("GRAPH")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON graph description (use \"-\" for stdin)")
}

/// Graph title (--label).
pub fn label_arg() -> Arg {
    Arg::new("label")
        .long("label")
        .value_name("TEXT")
        .help("Graph title (defaults to the file's label, then its name)")
}

/// Entry node by name (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .value_name("NODE")
        .help("Start from this node instead of the file's root")
}

/// Case-insensitive dispatch tables (-i/--ignore-case).
pub fn ignore_case_arg() -> Arg {
    Arg::new("ignore_case")
        .short('i')
        .long("ignore-case")
        .action(ArgAction::SetTrue)
        .help("Build dispatch tables case-insensitively")
}

/// Label choices with their dispatch tables (--dispatch-tables).
pub fn dispatch_tables_arg() -> Arg {
    Arg::new("dispatch_tables")
        .long("dispatch-tables")
        .action(ArgAction::SetTrue)
        .help("Label choice nodes with their dispatch tables")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
