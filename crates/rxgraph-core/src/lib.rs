#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for backtracking regexp automata.
//!
//! The graph arrives fully built from a regexp compiler (or from a JSON
//! description, see [`GraphFile::from_json`]). This crate only models it:
//! - **Node IR**: arena of typed nodes addressed by [`NodeId`]
//! - **Dispatch tables**: per-choice maps from code-unit ranges to the
//!   alternatives that can still match there ([`DispatchTable`], [`OutSet`])
//! - **Traversal**: cycle-safe depth-first driver ([`GraphVisitor`])

mod code_unit;
mod colors;
mod dispatch;
mod dispatch_builder;
mod graph;
mod invariants;
mod json;
mod node;
mod out_set;
mod visit;

#[cfg(test)]
mod dispatch_builder_tests;
#[cfg(test)]
mod json_tests;

pub use code_unit::{AsCodeUnit, CharacterRange, CodeUnit, MAX_CODE_UNIT};
pub use colors::Colors;
pub use dispatch::{DispatchTable, Entry};
pub use dispatch_builder::DispatchTables;
pub use graph::{Graph, NodeId};
pub use json::GraphFile;
pub use node::{
    Action, ActionNode, Alternative, AssertionKind, AssertionNode, BackReferenceNode,
    CharacterClass, ChoiceKind, ChoiceNode, Node, NodeInfo, NodeKind, TextElement, TextNode,
};
pub use out_set::OutSet;
pub use visit::{GraphVisitor, Traversal};

/// Errors produced while loading a graph description.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("node `{from}` references unknown node `{to}`")]
    UnknownNode { from: String, to: String },

    #[error("root node `{0}` is not defined")]
    UnknownRoot(String),

    #[error("graph has no nodes")]
    Empty,

    #[error("node `{node}`: range bound `{bound}` is not a single code unit")]
    InvalidRangeBound { node: String, bound: String },

    #[error("node `{node}`: range start {from:#06x} is above its end {to:#06x}")]
    InvertedRange { node: String, from: CodeUnit, to: CodeUnit },

    #[error("node `{0}` is defined more than once")]
    DuplicateNode(String),
}

/// Result type for graph loading.
pub type Result<T> = std::result::Result<T, GraphError>;
