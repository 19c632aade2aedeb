//! Graph fixtures for printer tests.

use rxgraph_core::GraphFile;

use crate::{DotOptions, dot_print, dump_tables};

/// Load a JSON graph description, panicking on malformed fixtures.
pub fn load(json: &str) -> GraphFile {
    GraphFile::from_json(json).unwrap_or_else(|e| panic!("bad fixture: {e}"))
}

/// Render a fixture under its own label.
pub fn render(json: &str, options: DotOptions) -> String {
    let file = load(json);
    let label = file.label.clone().unwrap_or_default();
    dot_print(&label, &file.graph, file.root, options)
}

/// Dump a fixture's tables without colors, honoring its `ignore_case`.
pub fn tables(json: &str) -> String {
    let file = load(json);
    dump_tables(&file.graph, file.root, file.ignore_case, Default::default())
}
