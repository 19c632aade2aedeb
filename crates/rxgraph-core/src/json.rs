//! JSON graph descriptions.
//!
//! Nodes are named; references between them use those names and may point
//! forward, which is how loops are written down. Names map to `NodeId`s in
//! file order.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::code_unit::{CharacterRange, CodeUnit};
use crate::graph::{Graph, NodeId};
use crate::node::{
    Action, ActionNode, AssertionKind, AssertionNode, BackReferenceNode, CharacterClass,
    ChoiceKind, ChoiceNode, Node, NodeInfo, NodeKind, TextElement, TextNode,
};
use crate::{GraphError, Result};

/// A graph loaded from JSON, with its entry point and render settings.
#[derive(Debug)]
pub struct GraphFile {
    pub label: Option<String>,
    pub ignore_case: bool,
    pub root: NodeId,
    pub graph: Graph,
    names: Vec<String>,
}

impl GraphFile {
    /// Parse and resolve a graph description.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawGraph = serde_json::from_str(json)?;
        raw.resolve()
    }

    /// Look a node up by its file name.
    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| NodeId::from_raw(i as u32))
    }
}

#[derive(Debug, Deserialize)]
struct RawGraph {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    ignore_case: bool,
    /// Defaults to the first node.
    #[serde(default)]
    root: Option<String>,
    nodes: RawNodes,
}

/// Node entries in file order. Duplicate names are kept so they can be
/// reported instead of silently replacing the earlier entry.
#[derive(Debug)]
struct RawNodes(Vec<(String, RawNode)>);

impl<'de> Deserialize<'de> for RawNodes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawNodes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of node names to nodes")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<RawNodes, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(RawNodes(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl RawNodes {
    fn into_unique(self) -> Result<IndexMap<String, RawNode>> {
        let mut nodes = IndexMap::with_capacity(self.0.len());
        for (name, node) in self.0 {
            if nodes.contains_key(&name) {
                return Err(GraphError::DuplicateNode(name));
            }
            nodes.insert(name, node);
        }
        Ok(nodes)
    }
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(flatten)]
    kind: RawKind,
    #[serde(default)]
    info: RawInfo,
}

#[derive(Debug, Default, Deserialize)]
struct RawInfo {
    #[serde(default)]
    bound_position: Option<u32>,
    #[serde(default)]
    newline_interest: bool,
    #[serde(default)]
    word_interest: bool,
    #[serde(default)]
    start_interest: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawKind {
    Choice {
        alternatives: Vec<String>,
        #[serde(default)]
        negative_lookaround: bool,
    },
    Text {
        elements: Vec<RawElement>,
        on_success: String,
    },
    BackReference {
        start_register: u32,
        end_register: u32,
        on_success: String,
    },
    End,
    Assertion {
        kind: AssertionKind,
        on_success: String,
    },
    Action {
        action: Action,
        on_success: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawElement {
    Atom(String),
    Class(RawClass),
}

#[derive(Debug, Deserialize)]
struct RawClass {
    #[serde(default)]
    negated: bool,
    ranges: Vec<(RawBound, RawBound)>,
}

/// A range bound: a one-character string or a raw code unit.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBound {
    Unit(CodeUnit),
    Char(String),
}

impl RawGraph {
    fn resolve(self) -> Result<GraphFile> {
        let nodes = self.nodes.into_unique()?;
        if nodes.is_empty() {
            return Err(GraphError::Empty);
        }

        let root = match &self.root {
            Some(name) => nodes
                .get_index_of(name)
                .ok_or_else(|| GraphError::UnknownRoot(name.clone()))?,
            None => 0,
        };

        let resolver = Resolver { nodes: &nodes };
        let mut graph = Graph::new();
        for (name, raw) in &nodes {
            let kind = resolver.kind(name, &raw.kind)?;
            graph.add_node(Node::new(kind).with_info(raw.info.to_info()));
        }

        Ok(GraphFile {
            label: self.label,
            ignore_case: self.ignore_case,
            root: NodeId::from_raw(root as u32),
            graph,
            names: nodes.into_keys().collect(),
        })
    }
}

impl RawInfo {
    fn to_info(&self) -> NodeInfo {
        NodeInfo {
            bound_position: self.bound_position,
            follows_newline_interest: self.newline_interest,
            follows_word_interest: self.word_interest,
            follows_start_interest: self.start_interest,
        }
    }
}

struct Resolver<'a> {
    nodes: &'a IndexMap<String, RawNode>,
}

impl Resolver<'_> {
    fn id(&self, from: &str, to: &str) -> Result<NodeId> {
        self.nodes
            .get_index_of(to)
            .map(|i| NodeId::from_raw(i as u32))
            .ok_or_else(|| GraphError::UnknownNode {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    fn kind(&self, name: &str, raw: &RawKind) -> Result<NodeKind> {
        let kind = match raw {
            RawKind::Choice {
                alternatives,
                negative_lookaround,
            } => {
                let targets = alternatives
                    .iter()
                    .map(|alt| self.id(name, alt))
                    .collect::<Result<Vec<_>>>()?;
                let mut choice = ChoiceNode::new(targets);
                if *negative_lookaround {
                    choice.kind = ChoiceKind::NegativeLookaround;
                }
                NodeKind::Choice(choice)
            }
            RawKind::Text {
                elements,
                on_success,
            } => NodeKind::Text(TextNode {
                elements: elements
                    .iter()
                    .map(|e| self.element(name, e))
                    .collect::<Result<Vec<_>>>()?,
                on_success: self.id(name, on_success)?,
            }),
            RawKind::BackReference {
                start_register,
                end_register,
                on_success,
            } => NodeKind::BackReference(BackReferenceNode {
                start_register: *start_register,
                end_register: *end_register,
                on_success: self.id(name, on_success)?,
            }),
            RawKind::End => NodeKind::End,
            RawKind::Assertion { kind, on_success } => NodeKind::Assertion(AssertionNode {
                kind: *kind,
                on_success: self.id(name, on_success)?,
            }),
            RawKind::Action { action, on_success } => NodeKind::Action(ActionNode {
                action: *action,
                on_success: self.id(name, on_success)?,
            }),
        };
        Ok(kind)
    }

    fn element(&self, name: &str, raw: &RawElement) -> Result<TextElement> {
        match raw {
            RawElement::Atom(text) => Ok(TextElement::atom(text)),
            RawElement::Class(class) => {
                let ranges = class
                    .ranges
                    .iter()
                    .map(|(from, to)| {
                        let (from, to) = (bound(name, from)?, bound(name, to)?);
                        if from > to {
                            return Err(GraphError::InvertedRange {
                                node: name.to_string(),
                                from,
                                to,
                            });
                        }
                        Ok(CharacterRange::new(from, to))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(TextElement::CharClass(CharacterClass {
                    negated: class.negated,
                    ranges,
                }))
            }
        }
    }
}

fn bound(node: &str, raw: &RawBound) -> Result<CodeUnit> {
    match raw {
        RawBound::Unit(unit) => Ok(*unit),
        RawBound::Char(s) => {
            let mut units = s.encode_utf16();
            match (units.next(), units.next()) {
                (Some(unit), None) => Ok(unit),
                _ => Err(GraphError::InvalidRangeBound {
                    node: node.to_string(),
                    bound: s.clone(),
                }),
            }
        }
    }
}
