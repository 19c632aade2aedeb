use std::path::PathBuf;

use rxgraph_core::Colors;
use rxgraph_dot::dump_tables;

use super::graph_loader::{load_graph_or_exit, select_root_or_exit};

pub struct TablesArgs {
    pub graph_path: PathBuf,
    pub root: Option<String>,
    pub ignore_case: bool,
    pub color: bool,
}

pub fn run(args: TablesArgs) {
    let file = load_graph_or_exit(&args.graph_path);
    let root = select_root_or_exit(&file, args.root.as_deref());
    let colors = Colors::new(args.color);
    print!(
        "{}",
        dump_tables(
            &file.graph,
            root,
            args.ignore_case || file.ignore_case,
            colors
        )
    );
}
