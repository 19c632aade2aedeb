//! Graphviz `digraph` emission.
//!
//! One pre-order pass over the reachable graph. Each node produces its
//! declaration, an optional attribute record, and its outgoing edges before
//! its successors are visited. Edges into already-visited nodes are still
//! written; only the node itself is not rendered twice.

use std::fmt::Write;

use rxgraph_core::{
    ActionNode, AssertionNode, BackReferenceNode, ChoiceKind, ChoiceNode, DispatchTable,
    DispatchTables, Graph, GraphVisitor, NodeId, TextNode, Traversal,
};

use crate::DotOptions;
use crate::escape::{escape_label, escape_record};
use crate::labels::{
    CHOICE_LABEL, Shape, action_label, assertion_label, back_reference_label, text_label,
};

/// Renders one graph. Consumed by [`DotPrinter::print`].
pub struct DotPrinter<'g> {
    graph: &'g Graph,
    options: DotOptions,
    tables: DispatchTables,
    traversal: Traversal,
    out: String,
}

impl<'g> DotPrinter<'g> {
    pub fn new(graph: &'g Graph, options: DotOptions) -> Self {
        Self {
            graph,
            options,
            tables: DispatchTables::new(options.ignore_case),
            traversal: Traversal::new(),
            out: String::new(),
        }
    }

    /// Render everything reachable from `root` under the graph title `label`.
    pub fn print(mut self, label: &str, root: NodeId) -> String {
        writeln!(self.out, "digraph G {{").unwrap();
        writeln!(self.out, "  graph [label=\"{}\"];", escape_label(label)).unwrap();
        self.visit(root);
        writeln!(self.out, "}}").unwrap();
        self.out
    }

    /// Declaration with a quoted label, followed by the attribute record.
    fn declare(&mut self, id: NodeId, label: &str, shape: Shape, extra: &str) {
        writeln!(
            self.out,
            "  n{id} [label=\"{}\", shape={shape}{extra}];",
            escape_label(label)
        )
        .unwrap();
        self.print_attributes(id);
    }

    fn print_attributes(&mut self, id: NodeId) {
        let info = self.graph.node(id).info;
        if info.is_empty() {
            return;
        }

        let mut fields = Vec::with_capacity(4);
        if info.follows_newline_interest {
            fields.push("{NI}".to_string());
        }
        if info.follows_word_interest {
            fields.push("{WI}".to_string());
        }
        if info.follows_start_interest {
            fields.push("{SI}".to_string());
        }
        if let Some(pos) = info.bound_position {
            fields.push(format!("{{@|{pos}}}"));
        }

        writeln!(
            self.out,
            "  a{id} [shape=Mrecord, color=grey, fontcolor=grey, margin=0.1, fontsize=10, label=\"{{{}}}\"];",
            fields.join("|")
        )
        .unwrap();
        writeln!(
            self.out,
            "  a{id} -> n{id} [style=dashed, color=grey, arrowhead=none];"
        )
        .unwrap();
    }

    fn edge(&mut self, from: NodeId, to: NodeId) {
        writeln!(self.out, "  n{from} -> n{to};").unwrap();
    }

    fn failure_edge(&mut self, from: NodeId, to: NodeId) {
        writeln!(self.out, "  n{from} -> n{to} [style=dotted];").unwrap();
    }

    /// Declaration, edge and successor of a single-continuation node.
    fn print_linear(&mut self, id: NodeId, label: &str, shape: Shape, extra: &str, next: NodeId) {
        self.declare(id, label, shape, extra);
        self.edge(id, next);
        self.visit(next);
    }

    fn print_alternation(&mut self, id: NodeId, node: &'g ChoiceNode) {
        if self.options.dispatch_tables {
            let table = self.tables.get(self.graph, id);
            let (label, ports) = table_record(table);
            writeln!(self.out, "  n{id} [shape=Mrecord, label=\"{label}\"];").unwrap();
            self.print_attributes(id);
            for (port, alt) in ports {
                let target = node.alternatives[alt as usize].node;
                writeln!(self.out, "  n{id}:{port} -> n{target};").unwrap();
            }
        } else {
            writeln!(self.out, "  n{id} [shape=Mrecord, label=\"{CHOICE_LABEL}\"];").unwrap();
            self.print_attributes(id);
            for alt in &node.alternatives {
                self.edge(id, alt.node);
            }
        }

        for alt in &node.alternatives {
            self.visit(alt.node);
        }
    }

    fn print_lookaround(&mut self, id: NodeId, node: &'g ChoiceNode) {
        writeln!(self.out, "  n{id} [shape=Mrecord, label=\"{CHOICE_LABEL}\"];").unwrap();
        self.print_attributes(id);

        let Some((body, continuations)) = node.alternatives.split_first() else {
            return;
        };
        self.edge(id, body.node);
        for alt in continuations {
            self.failure_edge(id, alt.node);
        }
        for alt in continuations {
            self.visit_on_failure(id, alt.node);
        }
        self.visit(body.node);
    }
}

/// Record label of a dispatch table plus the `(port, alternative)` pairs to
/// draw edges from.
///
/// Each entry becomes `{from-to|{<s<from>o<alt>> <priority>|...}}`, where
/// priority counts the entry's members in ascending order.
fn table_record(table: &DispatchTable) -> (String, Vec<(String, u32)>) {
    let mut fields = Vec::with_capacity(table.len());
    let mut ports = Vec::new();

    table.for_each(|from, entry| {
        let mut cells = Vec::new();
        for (priority, alt) in entry.out_set.iter().enumerate() {
            let port = format!("s{from}o{alt}");
            cells.push(format!("<{port}> {priority}"));
            ports.push((port, alt));
        }
        fields.push(format!(
            "{{{}-{}|{{{}}}}}",
            escape_record(entry.from),
            escape_record(entry.to),
            cells.join("|")
        ));
    });

    (fields.join("|"), ports)
}

impl<'g> GraphVisitor<'g> for DotPrinter<'g> {
    fn graph(&self) -> &'g Graph {
        self.graph
    }

    fn traversal(&mut self) -> &mut Traversal {
        &mut self.traversal
    }

    fn visit_choice(&mut self, id: NodeId, node: &'g ChoiceNode) {
        match node.kind {
            ChoiceKind::Alternation => self.print_alternation(id, node),
            ChoiceKind::NegativeLookaround => self.print_lookaround(id, node),
        }
    }

    fn visit_text(&mut self, id: NodeId, node: &'g TextNode) {
        let label = text_label(node);
        self.print_linear(id, &label, Shape::Box, ", peripheries=2", node.on_success);
    }

    fn visit_back_reference(&mut self, id: NodeId, node: &'g BackReferenceNode) {
        let label = back_reference_label(node);
        self.print_linear(id, &label, Shape::DoubleOctagon, "", node.on_success);
    }

    fn visit_end(&mut self, id: NodeId) {
        writeln!(self.out, "  n{id} [style=bold, shape={}];", Shape::Point).unwrap();
        self.print_attributes(id);
    }

    fn visit_assertion(&mut self, id: NodeId, node: &'g AssertionNode) {
        let label = assertion_label(node.kind);
        self.print_linear(id, label, Shape::Septagon, "", node.on_success);
    }

    fn visit_action(&mut self, id: NodeId, node: &'g ActionNode) {
        let (label, shape) = action_label(&node.action);
        self.print_linear(id, &label, shape, "", node.on_success);
    }
}
