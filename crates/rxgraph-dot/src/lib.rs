//! Graphviz rendering of backtracking regexp automata.
//!
//! # Example
//!
//! ```
//! use rxgraph_core::{Graph, NodeKind, TextElement, TextNode};
//! use rxgraph_dot::{DotOptions, dot_print};
//!
//! let mut graph = Graph::new();
//! let end = graph.add_end();
//! let root = graph.add(NodeKind::Text(TextNode {
//!     elements: vec![TextElement::atom("ab")],
//!     on_success: end,
//! }));
//!
//! let dot = dot_print("/ab/", &graph, root, DotOptions::default());
//! if rxgraph_dot::ENABLED {
//!     assert!(dot.starts_with("digraph G {"));
//! }
//! ```
//!
//! Rendering is a diagnostic facility: it runs in debug builds, or in
//! release builds with the `diagnostics` feature. Otherwise every entry
//! point returns an empty string so call sites can stay unconditional.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod escape;
mod labels;
mod printer;
mod tables;

#[cfg(test)]
mod escape_tests;
#[cfg(test)]
mod test_utils;

use rxgraph_core::{Colors, Graph, NodeId};

pub use escape::{escape_label, escape_record};
pub use labels::Shape;
pub use printer::DotPrinter;

/// Whether rendering is compiled in.
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "diagnostics"));

/// Render options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DotOptions {
    /// Build dispatch tables case-insensitively.
    pub ignore_case: bool,
    /// Label choice nodes with their dispatch tables and draw alternative
    /// edges from the table cells.
    pub dispatch_tables: bool,
}

impl DotOptions {
    pub fn ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = value;
        self
    }

    pub fn dispatch_tables(mut self, value: bool) -> Self {
        self.dispatch_tables = value;
        self
    }
}

/// Render the graph reachable from `root` as a Graphviz `digraph`.
///
/// Returns an empty string when rendering is disabled.
pub fn dot_print(label: &str, graph: &Graph, root: NodeId, options: DotOptions) -> String {
    if !ENABLED {
        return String::new();
    }
    DotPrinter::new(graph, options).print(label, root)
}

/// Dump the dispatch table of every alternation reachable from `root`.
///
/// Negative-lookaround choices are skipped since the printer never draws
/// them through a table. Returns an empty string when rendering is disabled.
pub fn dump_tables(graph: &Graph, root: NodeId, ignore_case: bool, colors: Colors) -> String {
    if !ENABLED {
        return String::new();
    }
    tables::dump(graph, root, ignore_case, colors)
}
