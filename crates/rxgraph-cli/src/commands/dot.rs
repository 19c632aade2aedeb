use std::fs;
use std::path::{Path, PathBuf};

use rxgraph_core::{GraphFile, NodeId};
use rxgraph_dot::{DotOptions, dot_print};

use super::graph_loader::{display_name, load_graph_or_exit, select_root_or_exit};

pub struct DotArgs {
    pub graph_path: PathBuf,
    pub root: Option<String>,
    pub label: Option<String>,
    pub ignore_case: bool,
    pub dispatch_tables: bool,
    pub output: Option<PathBuf>,
}

pub fn run(args: DotArgs) {
    let file = load_graph_or_exit(&args.graph_path);
    let root = select_root_or_exit(&file, args.root.as_deref());
    let dot = render(&args, &file, root);

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &dot) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", dot),
    }
}

pub fn render(args: &DotArgs, file: &GraphFile, root: NodeId) -> String {
    let label = graph_label(args.label.as_deref(), file, &args.graph_path);
    let options = DotOptions::default()
        .ignore_case(args.ignore_case || file.ignore_case)
        .dispatch_tables(args.dispatch_tables);
    dot_print(&label, &file.graph, root, options)
}

/// Title precedence: `--label`, the file's `label`, the file name.
pub fn graph_label(explicit: Option<&str>, file: &GraphFile, path: &Path) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| file.label.clone())
        .unwrap_or_else(|| display_name(path))
}
