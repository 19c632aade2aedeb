//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::graph::{Graph, NodeId};
use crate::node::Node;

impl Graph {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &Node {
        let len = self.len();
        self.get(id).unwrap_or_else(|| {
            panic!("Graph: node n{id} not found (graph has {len} nodes; ids come from this graph)")
        })
    }

    pub(crate) fn ensure_node_mut(&mut self, id: NodeId) -> &mut Node {
        let len = self.len();
        self.nodes_slice_mut().get_mut(id.index()).unwrap_or_else(|| {
            panic!("Graph: node n{id} not found (graph has {len} nodes; ids come from this graph)")
        })
    }

    pub(crate) fn not_a_choice(id: NodeId, kind: &str) -> ! {
        panic!("Graph: cannot add an alternative to n{id}, which is a {kind} node")
    }

    pub(crate) fn no_continuation(id: NodeId, kind: &str) -> ! {
        panic!("Graph: n{id} is a {kind} node and has no success continuation")
    }
}
