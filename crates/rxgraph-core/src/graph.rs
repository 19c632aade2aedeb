//! Arena holding the automaton's nodes.
//!
//! Nodes are stored in a flat vector and referenced by `NodeId`. The id
//! doubles as the node's textual identity in rendered output, so it stays
//! stable for the lifetime of the graph.

use std::fmt;

use crate::node::{Alternative, Node, NodeInfo, NodeKind};

/// Index into `Graph::nodes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Create a NodeId from a raw index. The id is only meaningful for the
    /// graph that issued it.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Node graph of a compiled pattern.
///
/// The graph may contain cycles (repetitions compile to loops). Consumers
/// never relink nodes; the mutating methods exist for whoever builds it.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its ID.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add a node with empty debug metadata.
    pub fn add(&mut self, kind: NodeKind) -> NodeId {
        self.add_node(Node::new(kind))
    }

    /// Add a terminal node.
    pub fn add_end(&mut self) -> NodeId {
        self.add(NodeKind::End)
    }

    /// Get node by ID.
    pub fn node(&self, id: NodeId) -> &Node {
        self.ensure_node(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.ensure_node_mut(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Replace a node's debug metadata.
    pub fn set_info(&mut self, id: NodeId, info: NodeInfo) {
        self.node_mut(id).info = info;
    }

    /// Append `target` as the lowest-priority alternative of `choice`.
    pub fn add_alternative(&mut self, choice: NodeId, target: NodeId) {
        match &mut self.node_mut(choice).kind {
            NodeKind::Choice(c) => c.alternatives.push(Alternative::new(target)),
            other => Self::not_a_choice(choice, other.name()),
        }
    }

    /// Redirect the success continuation of `node` to `target`.
    ///
    /// Used to close loops after the loop body has been added.
    pub fn set_on_success(&mut self, node: NodeId, target: NodeId) {
        let kind = &mut self.node_mut(node).kind;
        let name = kind.name();
        match kind.on_success_mut() {
            Some(slot) => *slot = target,
            None => Self::no_continuation(node, name),
        }
    }

    /// Successors in edge order: alternatives for choices, the success
    /// continuation otherwise.
    pub fn successors(&self, id: NodeId) -> Vec<NodeId> {
        match &self.node(id).kind {
            NodeKind::Choice(c) => c.alternatives.iter().map(|a| a.node).collect(),
            kind => kind.on_success().into_iter().collect(),
        }
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub(crate) fn nodes_slice_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }
}
