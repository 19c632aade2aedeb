//! Node labels and shapes, one rule per variant.
//!
//! Labels are returned unescaped; the printer escapes them when it embeds
//! them in a quoted string.

use std::fmt;

use rxgraph_core::{Action, AsCodeUnit, AssertionKind, BackReferenceNode, TextElement, TextNode};

/// Graphviz node shapes used by the printer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Mrecord,
    Box,
    DoubleOctagon,
    Point,
    Septagon,
    Octagon,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Mrecord => "Mrecord",
            Shape::Box => "box",
            Shape::DoubleOctagon => "doubleoctagon",
            Shape::Point => "point",
            Shape::Septagon => "septagon",
            Shape::Octagon => "octagon",
        };
        f.write_str(name)
    }
}

/// Placeholder label of a choice node without a dispatch table.
pub(crate) const CHOICE_LABEL: &str = "?";

/// Text elements separated by single spaces: atoms verbatim, classes as
/// `[^lo-hi...]`.
pub(crate) fn text_label(node: &TextNode) -> String {
    let mut out = String::new();
    for (i, element) in node.elements.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match element {
            TextElement::Atom(units) => {
                out.extend(
                    char::decode_utf16(units.iter().copied())
                        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
                );
            }
            TextElement::CharClass(class) => {
                out.push('[');
                if class.negated {
                    out.push('^');
                }
                for range in &class.ranges {
                    out.push_str(&format!("{}-{}", AsCodeUnit(range.from), AsCodeUnit(range.to)));
                }
                out.push(']');
            }
        }
    }
    out
}

pub(crate) fn back_reference_label(node: &BackReferenceNode) -> String {
    format!("${}..${}", node.start_register, node.end_register)
}

pub(crate) fn assertion_label(kind: AssertionKind) -> &'static str {
    match kind {
        AssertionKind::AtStart => "^",
        AssertionKind::AtEnd => "$",
        AssertionKind::AtBoundary => "\\b",
        AssertionKind::AtNonBoundary => "\\B",
        AssertionKind::AfterNewline => "(?<=\\n)",
    }
}

/// Label and shape of an action. Submatch bookkeeping and checks use a
/// septagon, plain register writes an octagon.
pub(crate) fn action_label(action: &Action) -> (String, Shape) {
    match *action {
        Action::SetRegister { reg, value } => (format!("${reg}:={value}"), Shape::Octagon),
        Action::IncrementRegister { reg } => (format!("${reg}++"), Shape::Octagon),
        Action::StorePosition { reg, .. } => (format!("${reg}:=$pos"), Shape::Octagon),
        Action::BeginSubmatch {
            current_position_register,
            ..
        } => (
            format!("${current_position_register}:=$pos,begin"),
            Shape::Septagon,
        ),
        Action::PositiveSubmatchSuccess { .. } => ("escape".to_string(), Shape::Septagon),
        Action::EmptyMatchCheck {
            start_register,
            repetition_register,
            repetition_limit,
        } => (
            format!("${start_register}=$pos?,${repetition_register}<{repetition_limit}?"),
            Shape::Septagon,
        ),
        Action::ClearCaptures { from, to } => (format!("clear ${from}..${to}"), Shape::Septagon),
    }
}
