//! Node variants of the backtracking automaton.
//!
//! Every node except `Choice` and `End` has exactly one `on_success`
//! continuation. Choices branch to prioritized alternatives; `End` is
//! terminal.

use serde::Deserialize;

use crate::code_unit::{CharacterRange, CodeUnit};
use crate::graph::NodeId;

/// A graph node: its variant plus compiler-provided debug metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub info: NodeInfo,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            info: NodeInfo::default(),
        }
    }

    pub fn with_info(mut self, info: NodeInfo) -> Self {
        self.info = info;
        self
    }
}

/// Per-node debug metadata, read-only for renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeInfo {
    /// Code address, once the node's label has been bound.
    pub bound_position: Option<u32>,
    pub follows_newline_interest: bool,
    pub follows_word_interest: bool,
    pub follows_start_interest: bool,
}

impl NodeInfo {
    pub fn bound_at(mut self, position: u32) -> Self {
        self.bound_position = Some(position);
        self
    }

    pub fn newline_interest(mut self) -> Self {
        self.follows_newline_interest = true;
        self
    }

    pub fn word_interest(mut self) -> Self {
        self.follows_word_interest = true;
        self
    }

    pub fn start_interest(mut self) -> Self {
        self.follows_start_interest = true;
        self
    }

    /// True when none of the fields carry anything worth showing.
    pub fn is_empty(&self) -> bool {
        self.bound_position.is_none()
            && !self.follows_newline_interest
            && !self.follows_word_interest
            && !self.follows_start_interest
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Choice(ChoiceNode),
    Text(TextNode),
    BackReference(BackReferenceNode),
    End,
    Assertion(AssertionNode),
    Action(ActionNode),
}

impl NodeKind {
    /// The single success continuation, for variants that have one.
    pub fn on_success(&self) -> Option<NodeId> {
        match self {
            NodeKind::Text(n) => Some(n.on_success),
            NodeKind::BackReference(n) => Some(n.on_success),
            NodeKind::Assertion(n) => Some(n.on_success),
            NodeKind::Action(n) => Some(n.on_success),
            NodeKind::Choice(_) | NodeKind::End => None,
        }
    }

    pub(crate) fn on_success_mut(&mut self) -> Option<&mut NodeId> {
        match self {
            NodeKind::Text(n) => Some(&mut n.on_success),
            NodeKind::BackReference(n) => Some(&mut n.on_success),
            NodeKind::Assertion(n) => Some(&mut n.on_success),
            NodeKind::Action(n) => Some(&mut n.on_success),
            NodeKind::Choice(_) | NodeKind::End => None,
        }
    }

    /// Short variant name for messages.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Choice(_) => "choice",
            NodeKind::Text(_) => "text",
            NodeKind::BackReference(_) => "back_reference",
            NodeKind::End => "end",
            NodeKind::Assertion(_) => "assertion",
            NodeKind::Action(_) => "action",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChoiceKind {
    /// Alternation or repetition: alternatives are tried in order.
    #[default]
    Alternation,
    /// `(?!...)`: the first alternative is the lookaround body, the rest
    /// run when the body fails to match.
    NegativeLookaround,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChoiceNode {
    pub kind: ChoiceKind,
    /// In priority order.
    pub alternatives: Vec<Alternative>,
}

impl ChoiceNode {
    pub fn new(targets: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            kind: ChoiceKind::Alternation,
            alternatives: targets.into_iter().map(Alternative::new).collect(),
        }
    }

    pub fn negative_lookaround(body: NodeId, continuation: NodeId) -> Self {
        Self {
            kind: ChoiceKind::NegativeLookaround,
            alternatives: vec![Alternative::new(body), Alternative::new(continuation)],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alternative {
    pub node: NodeId,
}

impl Alternative {
    pub fn new(node: NodeId) -> Self {
        Self { node }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    pub elements: Vec<TextElement>,
    pub on_success: NodeId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextElement {
    Atom(Vec<CodeUnit>),
    CharClass(CharacterClass),
}

impl TextElement {
    pub fn atom(text: &str) -> Self {
        TextElement::Atom(text.encode_utf16().collect())
    }

    pub fn class(ranges: impl IntoIterator<Item = CharacterRange>) -> Self {
        TextElement::CharClass(CharacterClass {
            negated: false,
            ranges: ranges.into_iter().collect(),
        })
    }

    pub fn negated_class(ranges: impl IntoIterator<Item = CharacterRange>) -> Self {
        TextElement::CharClass(CharacterClass {
            negated: true,
            ranges: ranges.into_iter().collect(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterClass {
    pub negated: bool,
    pub ranges: Vec<CharacterRange>,
}

impl CharacterClass {
    /// The code units this class matches, canonicalized.
    pub fn matched_ranges(&self) -> Vec<CharacterRange> {
        if self.negated {
            return CharacterRange::negate(&self.ranges);
        }
        let mut ranges = self.ranges.clone();
        CharacterRange::canonicalize(&mut ranges);
        ranges
    }
}

/// Matches the text captured between two registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackReferenceNode {
    pub start_register: u32,
    pub end_register: u32,
    pub on_success: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionKind {
    AtStart,
    AtEnd,
    AtBoundary,
    AtNonBoundary,
    AfterNewline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssertionNode {
    pub kind: AssertionKind,
    pub on_success: NodeId,
}

/// Register-level side effect performed before continuing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    SetRegister {
        reg: u32,
        value: i32,
    },
    IncrementRegister {
        reg: u32,
    },
    StorePosition {
        reg: u32,
        #[serde(default)]
        is_capture: bool,
    },
    BeginSubmatch {
        stack_pointer_register: u32,
        current_position_register: u32,
    },
    PositiveSubmatchSuccess {
        stack_pointer_register: u32,
        current_position_register: u32,
        #[serde(default)]
        clear_register_count: u32,
        #[serde(default)]
        clear_register_from: u32,
    },
    EmptyMatchCheck {
        start_register: u32,
        repetition_register: u32,
        repetition_limit: u32,
    },
    ClearCaptures {
        from: u32,
        to: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionNode {
    pub action: Action,
    pub on_success: NodeId,
}
