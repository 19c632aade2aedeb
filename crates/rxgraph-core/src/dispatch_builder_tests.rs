use super::code_unit::CharacterRange;
use super::dispatch::DispatchTable;
use super::dispatch_builder::DispatchTables;
use super::graph::{Graph, NodeId};
use super::node::*;

fn text(g: &mut Graph, element: TextElement, on_success: NodeId) -> NodeId {
    g.add(NodeKind::Text(TextNode {
        elements: vec![element],
        on_success,
    }))
}

fn r(from: u8, to: u8) -> CharacterRange {
    CharacterRange::new(from as u16, to as u16)
}

#[test]
fn atoms_dispatch_on_first_unit() {
    let mut g = Graph::new();
    let end = g.add_end();
    let foo = text(&mut g, TextElement::atom("foo"), end);
    let bar = text(&mut g, TextElement::atom("bar"), end);
    let choice = g.add(NodeKind::Choice(ChoiceNode::new([foo, bar])));

    let table = DispatchTable::build(&g, choice, false);

    insta::assert_snapshot!(table.to_string(), @r"
    [b-b]: {1}
    [f-f]: {0}
    ");
}

#[test]
fn overlapping_classes() {
    let mut g = Graph::new();
    let end = g.add_end();
    let lower = text(&mut g, TextElement::class([r(b'a', b'z')]), end);
    let hex = text(&mut g, TextElement::class([r(b'0', b'9'), r(b'a', b'f')]), end);
    let choice = g.add(NodeKind::Choice(ChoiceNode::new([lower, hex])));

    let table = DispatchTable::build(&g, choice, false);

    insta::assert_snapshot!(table.to_string(), @r"
    [0-9]: {1}
    [a-f]: {0, 1}
    [g-z]: {0}
    ");
}

#[test]
fn negated_class_covers_complement() {
    let mut g = Graph::new();
    let end = g.add_end();
    let not_digit = text(&mut g, TextElement::negated_class([r(b'0', b'9')]), end);
    let digit = text(&mut g, TextElement::class([r(b'0', b'9')]), end);
    let choice = g.add(NodeKind::Choice(ChoiceNode::new([not_digit, digit])));

    let table = DispatchTable::build(&g, choice, false);

    insta::assert_snapshot!(table.to_string(), @r"
    [\u0000-/]: {0}
    [0-9]: {1}
    [:-\uffff]: {0}
    ");
}

#[test]
fn end_and_assertions_match_anything() {
    let mut g = Graph::new();
    let end = g.add_end();
    let x = text(&mut g, TextElement::atom("x"), end);
    let choice = g.add(NodeKind::Choice(ChoiceNode::new([x, end])));

    let table = DispatchTable::build(&g, choice, false);

    insta::assert_snapshot!(table.to_string(), @r"
    [\u0000-w]: {1}
    [x-x]: {0, 1}
    [y-\uffff]: {1}
    ");
}

#[test]
fn actions_are_transparent() {
    let mut g = Graph::new();
    let end = g.add_end();
    let q = text(&mut g, TextElement::atom("q"), end);
    let store = g.add(NodeKind::Action(ActionNode {
        action: Action::StorePosition {
            reg: 2,
            is_capture: true,
        },
        on_success: q,
    }));
    let z = text(&mut g, TextElement::atom("z"), end);
    let choice = g.add(NodeKind::Choice(ChoiceNode::new([store, z])));

    let table = DispatchTable::build(&g, choice, false);

    insta::assert_snapshot!(table.to_string(), @r"
    [q-q]: {0}
    [z-z]: {1}
    ");
}

#[test]
fn empty_atom_falls_through_to_next_element() {
    let mut g = Graph::new();
    let end = g.add_end();
    let t = g.add(NodeKind::Text(TextNode {
        elements: vec![TextElement::Atom(Vec::new()), TextElement::atom("k")],
        on_success: end,
    }));
    let choice = g.add(NodeKind::Choice(ChoiceNode::new([t])));

    let table = DispatchTable::build(&g, choice, false);

    insta::assert_snapshot!(table.to_string(), @"[k-k]: {0}");
}

#[test]
fn long_action_chain_reaches_first_text() {
    let mut g = Graph::new();
    let end = g.add_end();
    let mut next = text(&mut g, TextElement::atom("a"), end);
    for reg in 0..100_000 {
        next = g.add(NodeKind::Action(ActionNode {
            action: Action::IncrementRegister { reg },
            on_success: next,
        }));
    }
    let choice = g.add(NodeKind::Choice(ChoiceNode::new([next])));

    let table = DispatchTable::build(&g, choice, false);

    insta::assert_snapshot!(table.to_string(), @"[a-a]: {0}");
}

#[test]
fn nested_loop_does_not_recurse_forever() {
    // (a|b)* where the inner choice loops back to the outer one
    let mut g = Graph::new();
    let end = g.add_end();
    let outer = g.add(NodeKind::Choice(ChoiceNode::default()));
    let a = text(&mut g, TextElement::atom("a"), outer);
    let b = text(&mut g, TextElement::atom("b"), outer);
    let inner = g.add(NodeKind::Choice(ChoiceNode::new([a, b])));
    let loop_back = g.add(NodeKind::Action(ActionNode {
        action: Action::IncrementRegister { reg: 0 },
        on_success: outer,
    }));
    g.add_alternative(outer, inner);
    g.add_alternative(outer, loop_back);
    g.add_alternative(outer, end);

    let table = DispatchTable::build(&g, outer, false);

    insta::assert_snapshot!(table.to_string(), @r"
    [\u0000-`]: {1, 2}
    [a-b]: {0, 1, 2}
    [c-\uffff]: {1, 2}
    ");
}

#[test]
fn ignore_case_adds_equivalents() {
    let mut g = Graph::new();
    let end = g.add_end();
    let a = text(&mut g, TextElement::atom("a"), end);
    let upper_b = text(&mut g, TextElement::atom("B"), end);
    let choice = g.add(NodeKind::Choice(ChoiceNode::new([a, upper_b])));

    let table = DispatchTable::build(&g, choice, true);

    insta::assert_snapshot!(table.to_string(), @r"
    [A-A]: {0}
    [B-B]: {1}
    [a-a]: {0}
    [b-b]: {1}
    ");
}

#[test]
fn permutations_stay_sorted_and_disjoint() {
    let elements = [
        TextElement::class([r(b'a', b'm')]),
        TextElement::class([r(b'h', b'z')]),
        TextElement::negated_class([r(b'c', b'x')]),
        TextElement::atom("j"),
    ];
    let orders = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];

    for order in orders {
        let mut g = Graph::new();
        let end = g.add_end();
        let targets: Vec<_> = order
            .iter()
            .map(|&i| text(&mut g, elements[i].clone(), end))
            .collect();
        let choice = g.add(NodeKind::Choice(ChoiceNode::new(targets)));

        let table = DispatchTable::build(&g, choice, false);

        let entries: Vec<_> = table.iter().collect();
        assert!(!entries.is_empty());
        for pair in entries.windows(2) {
            assert!(pair[0].to < pair[1].from, "order {order:?}: {pair:?}");
        }
    }
}

#[test]
fn cache_builds_once_per_choice() {
    let mut g = Graph::new();
    let end = g.add_end();
    let x = text(&mut g, TextElement::atom("x"), end);
    let choice = g.add(NodeKind::Choice(ChoiceNode::new([x])));
    let mut tables = DispatchTables::new(false);

    let first = tables.get(&g, choice).clone();
    let second = tables.get(&g, choice).clone();

    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    assert_eq!(tables.len(), 1);
    assert!(!tables.ignore_case());
}

#[test]
#[should_panic(expected = "is not a choice node")]
fn building_for_non_choice_panics() {
    let mut g = Graph::new();
    let end = g.add_end();
    DispatchTable::build(&g, end, false);
}
