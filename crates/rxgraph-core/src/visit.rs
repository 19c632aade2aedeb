//! Cycle-safe depth-first traversal with per-variant dispatch.
//!
//! Implementors supply the per-variant callbacks and a [`Traversal`] scoped
//! to one pass. Callbacks do their own work first and then call `visit` on
//! successors, which yields pre-order processing. Each node is dispatched
//! exactly once even when the graph loops back on itself.
//!
//! The driver runs on an explicit work stack: `visit` calls made from inside
//! a callback only queue the target, and the outermost `visit` dispatches
//! queued nodes once the callback returns. Traversal depth is therefore not
//! bounded by the call stack. Callbacks must not rely on a successor having
//! been processed when `visit` returns.

use std::collections::HashSet;

use crate::graph::{Graph, NodeId};
use crate::node::{
    ActionNode, AssertionNode, BackReferenceNode, ChoiceNode, Node, NodeKind, TextNode,
};

/// Per-pass traversal state: the visited set and the pending work.
#[derive(Debug, Default)]
pub struct Traversal {
    visited: HashSet<NodeId>,
    /// Targets requested by the callback currently running, in call order.
    requested: Vec<NodeId>,
    /// Nodes awaiting dispatch; the top is dispatched next.
    stack: Vec<NodeId>,
    running: bool,
}

impl Traversal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the current callback's requests onto the stack so the first
    /// request is dispatched first.
    fn flush_requests(&mut self) {
        while let Some(id) = self.requested.pop() {
            self.stack.push(id);
        }
    }
}

pub trait GraphVisitor<'g> {
    fn graph(&self) -> &'g Graph;

    fn traversal(&mut self) -> &mut Traversal;

    fn visit_choice(&mut self, id: NodeId, node: &'g ChoiceNode);
    fn visit_text(&mut self, id: NodeId, node: &'g TextNode);
    fn visit_back_reference(&mut self, id: NodeId, node: &'g BackReferenceNode);
    fn visit_end(&mut self, id: NodeId);
    fn visit_assertion(&mut self, id: NodeId, node: &'g AssertionNode);
    fn visit_action(&mut self, id: NodeId, node: &'g ActionNode);

    /// Dispatch `id` unless it was already visited in this pass.
    fn visit(&mut self, id: NodeId) {
        let traversal = self.traversal();
        if traversal.running {
            traversal.requested.push(id);
            return;
        }

        traversal.running = true;
        traversal.stack.push(id);
        while let Some(next) = self.traversal().stack.pop() {
            if !self.traversal().visited.insert(next) {
                continue;
            }
            let node = self.graph().node(next);
            node.accept(next, self);
            self.traversal().flush_requests();
        }
        self.traversal().running = false;
    }

    /// Follow the failure continuation `from` → `to`.
    fn visit_on_failure(&mut self, from: NodeId, to: NodeId) {
        let _ = from;
        self.visit(to);
    }
}

impl Node {
    /// Call the visitor method matching this node's variant.
    pub fn accept<'g, V>(&'g self, id: NodeId, visitor: &mut V)
    where
        V: GraphVisitor<'g> + ?Sized,
    {
        match &self.kind {
            NodeKind::Choice(n) => visitor.visit_choice(id, n),
            NodeKind::Text(n) => visitor.visit_text(id, n),
            NodeKind::BackReference(n) => visitor.visit_back_reference(id, n),
            NodeKind::End => visitor.visit_end(id),
            NodeKind::Assertion(n) => visitor.visit_assertion(id, n),
            NodeKind::Action(n) => visitor.visit_action(id, n),
        }
    }
}
