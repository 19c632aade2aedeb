//! Lazy construction of dispatch tables for choice nodes.
//!
//! Tables are derived data: a pure function of a choice's alternatives and
//! the case-insensitivity flag. They live in a side table keyed by `NodeId`
//! instead of on the nodes, so the graph itself stays immutable.

use std::collections::{HashMap, HashSet};

use crate::code_unit::CharacterRange;
use crate::dispatch::DispatchTable;
use crate::graph::{Graph, NodeId};
use crate::node::{NodeKind, TextElement};

/// Dispatch tables built on demand, for one case-insensitivity setting.
#[derive(Debug, Default)]
pub struct DispatchTables {
    ignore_case: bool,
    tables: HashMap<NodeId, DispatchTable>,
}

impl DispatchTables {
    pub fn new(ignore_case: bool) -> Self {
        Self {
            ignore_case,
            tables: HashMap::new(),
        }
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Table of `choice`, built on first request.
    ///
    /// Panics if `choice` is not a choice node.
    pub fn get(&mut self, graph: &Graph, choice: NodeId) -> &DispatchTable {
        let ignore_case = self.ignore_case;
        self.tables
            .entry(choice)
            .or_insert_with(|| DispatchTable::build(graph, choice, ignore_case))
    }

    /// Number of tables built so far.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl DispatchTable {
    /// Compute the table of `choice` from scratch.
    ///
    /// Alternative `i` is added over every code unit that can begin a match
    /// of it. Actions are transparent; ends, assertions and back references
    /// may begin with anything.
    pub fn build(graph: &Graph, choice: NodeId, ignore_case: bool) -> DispatchTable {
        let NodeKind::Choice(node) = &graph.node(choice).kind else {
            panic!("DispatchTable: n{choice} is not a choice node");
        };

        let mut table = DispatchTable::new();
        for (index, alt) in node.alternatives.iter().enumerate() {
            let mut ranges = Vec::new();
            FirstUnits::new(graph).collect(alt.node, &mut ranges);
            if ignore_case {
                CharacterRange::add_case_equivalents(&mut ranges);
            } else {
                CharacterRange::canonicalize(&mut ranges);
            }
            for range in ranges {
                table.add_range(range, index as u32);
            }
        }
        table
    }
}

/// Collects the code units that can start a match from a node.
struct FirstUnits<'g> {
    graph: &'g Graph,
    /// Nodes already expanded; revisiting one adds nothing new.
    seen: HashSet<NodeId>,
}

impl<'g> FirstUnits<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            seen: HashSet::new(),
        }
    }

    /// Push every range that can begin a match from `start` onto `out`.
    ///
    /// The result is canonicalized afterwards, so the walk order is free.
    fn collect(&mut self, start: NodeId, out: &mut Vec<CharacterRange>) {
        let mut pending = vec![start];
        while let Some(id) = pending.pop() {
            if !self.seen.insert(id) {
                continue;
            }

            match &self.graph.node(id).kind {
                NodeKind::Text(text) => match first_ranges(&text.elements) {
                    Some(ranges) => out.extend(ranges),
                    None => pending.push(text.on_success),
                },
                NodeKind::Action(action) => pending.push(action.on_success),
                NodeKind::Choice(choice) => {
                    pending.extend(choice.alternatives.iter().map(|alt| alt.node));
                }
                NodeKind::End | NodeKind::Assertion(_) | NodeKind::BackReference(_) => {
                    out.push(CharacterRange::everything());
                }
            }
        }
    }
}

/// Ranges of the first element that consumes input, or `None` when every
/// element is an empty atom.
fn first_ranges(elements: &[TextElement]) -> Option<Vec<CharacterRange>> {
    for element in elements {
        match element {
            TextElement::Atom(units) => {
                if let Some(&first) = units.first() {
                    return Some(vec![CharacterRange::single(first)]);
                }
            }
            TextElement::CharClass(class) => return Some(class.matched_ranges()),
        }
    }
    None
}
