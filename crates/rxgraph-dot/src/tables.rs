//! Text dump of the dispatch tables of every reachable alternation.
//!
//! Negative-lookaround choices are left out: the printer never renders them
//! through a table, since their alternatives are a body and its failure
//! continuations rather than competing branches.

use std::fmt::Write;

use rxgraph_core::{
    ActionNode, AsCodeUnit, AssertionNode, BackReferenceNode, ChoiceKind, ChoiceNode, Colors,
    DispatchTables, Graph, GraphVisitor, NodeId, TextNode, Traversal,
};

pub(crate) fn dump(graph: &Graph, root: NodeId, ignore_case: bool, colors: Colors) -> String {
    let mut collector = ChoiceCollector {
        graph,
        traversal: Traversal::new(),
        choices: Vec::new(),
    };
    collector.visit(root);

    let c = colors;
    let mut tables = DispatchTables::new(ignore_case);
    let mut out = String::new();
    for id in collector.choices {
        writeln!(out, "{}n{id}{}:", c.blue, c.reset).unwrap();
        for entry in tables.get(graph, id).iter() {
            let members: Vec<String> = entry.out_set.iter().map(|m| m.to_string()).collect();
            writeln!(
                out,
                "  {}[{}-{}]{}: {}{{{}}}{}",
                c.green,
                AsCodeUnit(entry.from),
                AsCodeUnit(entry.to),
                c.reset,
                c.dim,
                members.join(", "),
                c.reset
            )
            .unwrap();
        }
    }
    out
}

/// Reachable alternations in pre-order.
struct ChoiceCollector<'g> {
    graph: &'g Graph,
    traversal: Traversal,
    choices: Vec<NodeId>,
}

impl<'g> GraphVisitor<'g> for ChoiceCollector<'g> {
    fn graph(&self) -> &'g Graph {
        self.graph
    }

    fn traversal(&mut self) -> &mut Traversal {
        &mut self.traversal
    }

    fn visit_choice(&mut self, id: NodeId, node: &'g ChoiceNode) {
        if node.kind == ChoiceKind::Alternation {
            self.choices.push(id);
        }
        for alt in &node.alternatives {
            self.visit(alt.node);
        }
    }

    fn visit_text(&mut self, _id: NodeId, node: &'g TextNode) {
        self.visit(node.on_success);
    }

    fn visit_back_reference(&mut self, _id: NodeId, node: &'g BackReferenceNode) {
        self.visit(node.on_success);
    }

    fn visit_end(&mut self, _id: NodeId) {}

    fn visit_assertion(&mut self, _id: NodeId, node: &'g AssertionNode) {
        self.visit(node.on_success);
    }

    fn visit_action(&mut self, _id: NodeId, node: &'g ActionNode) {
        self.visit(node.on_success);
    }
}
