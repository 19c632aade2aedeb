use indoc::indoc;

use super::GraphError;
use super::code_unit::CharacterRange;
use super::json::GraphFile;
use super::node::*;

#[test]
fn parse_text_and_end() {
    let json = indoc! {r#"
        {
            "label": "/ab[^0-2]/",
            "root": "start",
            "nodes": {
                "start": {
                    "type": "text",
                    "elements": [
                        { "atom": "ab" },
                        { "class": { "negated": true, "ranges": [["0", "2"]] } }
                    ],
                    "on_success": "end",
                    "info": { "bound_position": 7, "start_interest": true }
                },
                "end": { "type": "end" }
            }
        }
    "#};

    let file = GraphFile::from_json(json).unwrap();

    assert_eq!(file.label.as_deref(), Some("/ab[^0-2]/"));
    assert!(!file.ignore_case);
    assert_eq!(file.id("start"), Some(file.root));
    let end = file.id("end").unwrap();
    let node = file.graph.node(file.root);
    assert_eq!(node.info, NodeInfo::default().bound_at(7).start_interest());
    let NodeKind::Text(text) = &node.kind else {
        panic!("expected text node");
    };
    assert_eq!(text.on_success, end);
    assert_eq!(
        text.elements,
        vec![
            TextElement::atom("ab"),
            TextElement::negated_class([CharacterRange::new(0x30, 0x32)]),
        ]
    );
}

#[test]
fn forward_references_form_a_loop() {
    let json = r#"{
        "nodes": {
            "loop": { "type": "choice", "alternatives": ["body", "end"] },
            "body": { "type": "text", "elements": [{ "atom": "a" }], "on_success": "loop" },
            "end": { "type": "end" }
        }
    }"#;

    let file = GraphFile::from_json(json).unwrap();

    assert_eq!(file.id("loop"), Some(file.root));
    let body = file.id("body").unwrap();
    assert_eq!(file.graph.successors(file.root), vec![body, file.id("end").unwrap()]);
    assert_eq!(file.graph.successors(body), vec![file.root]);
}

#[test]
fn parse_actions_and_assertions() {
    let json = r#"{
        "ignore_case": true,
        "nodes": {
            "set": { "type": "action", "action": { "kind": "set_register", "reg": 1, "value": -1 }, "on_success": "inc" },
            "inc": { "type": "action", "action": { "kind": "increment_register", "reg": 1 }, "on_success": "bol" },
            "bol": { "type": "assertion", "kind": "after_newline", "on_success": "ref" },
            "ref": { "type": "back_reference", "start_register": 2, "end_register": 3, "on_success": "check" },
            "check": {
                "type": "action",
                "action": { "kind": "empty_match_check", "start_register": 4, "repetition_register": 5, "repetition_limit": 10 },
                "on_success": "done"
            },
            "done": { "type": "end" }
        }
    }"#;

    let file = GraphFile::from_json(json).unwrap();
    let g = &file.graph;

    assert!(file.ignore_case);
    let kinds: Vec<_> = g.iter().map(|(_, n)| n.kind.clone()).collect();
    assert!(matches!(
        kinds[0],
        NodeKind::Action(ActionNode {
            action: Action::SetRegister { reg: 1, value: -1 },
            ..
        })
    ));
    assert!(matches!(
        kinds[2],
        NodeKind::Assertion(AssertionNode {
            kind: AssertionKind::AfterNewline,
            ..
        })
    ));
    assert!(matches!(
        kinds[3],
        NodeKind::BackReference(BackReferenceNode {
            start_register: 2,
            end_register: 3,
            ..
        })
    ));
    assert!(matches!(
        kinds[4],
        NodeKind::Action(ActionNode {
            action: Action::EmptyMatchCheck {
                repetition_limit: 10,
                ..
            },
            ..
        })
    ));
}

#[test]
fn negative_lookaround_choice() {
    let json = r#"{
        "nodes": {
            "look": { "type": "choice", "alternatives": ["body", "rest"], "negative_lookaround": true },
            "body": { "type": "end" },
            "rest": { "type": "end" }
        }
    }"#;

    let file = GraphFile::from_json(json).unwrap();

    let NodeKind::Choice(choice) = &file.graph.node(file.root).kind else {
        panic!("expected choice");
    };
    assert_eq!(choice.kind, ChoiceKind::NegativeLookaround);
}

#[test]
fn numeric_range_bounds() {
    let json = r#"{
        "nodes": {
            "t": { "type": "text", "elements": [{ "class": { "ranges": [[0, 31], ["~", 65535]] } }], "on_success": "e" },
            "e": { "type": "end" }
        }
    }"#;

    let file = GraphFile::from_json(json).unwrap();

    let NodeKind::Text(text) = &file.graph.node(file.root).kind else {
        panic!("expected text");
    };
    assert_eq!(
        text.elements,
        vec![TextElement::class([
            CharacterRange::new(0, 31),
            CharacterRange::new(0x7E, 0xFFFF),
        ])]
    );
}

#[test]
fn unknown_reference() {
    let json = r#"{ "nodes": { "a": { "type": "text", "elements": [], "on_success": "nowhere" } } }"#;

    let err = GraphFile::from_json(json).unwrap_err();

    assert!(matches!(err, GraphError::UnknownNode { .. }));
    insta::assert_snapshot!(err.to_string(), @"node `a` references unknown node `nowhere`");
}

#[test]
fn unknown_root() {
    let json = r#"{ "root": "main", "nodes": { "a": { "type": "end" } } }"#;

    let err = GraphFile::from_json(json).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"root node `main` is not defined");
}

#[test]
fn empty_graph() {
    let err = GraphFile::from_json(r#"{ "nodes": {} }"#).unwrap_err();

    assert!(matches!(err, GraphError::Empty));
}

#[test]
fn multi_character_bound() {
    let json = r#"{
        "nodes": {
            "t": { "type": "text", "elements": [{ "class": { "ranges": [["ab", "z"]] } }], "on_success": "t" }
        }
    }"#;

    let err = GraphFile::from_json(json).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"node `t`: range bound `ab` is not a single code unit");
}

#[test]
fn unknown_action_kind_is_rejected() {
    let json = r#"{
        "nodes": {
            "a": { "type": "action", "action": { "kind": "teleport" }, "on_success": "a" }
        }
    }"#;

    let err = GraphFile::from_json(json).unwrap_err();

    assert!(matches!(err, GraphError::Json(_)));
}

#[test]
fn inverted_range_is_rejected() {
    let json = r#"{
        "nodes": {
            "t": { "type": "text", "elements": [{ "class": { "ranges": [["z", "a"]] } }], "on_success": "t" }
        }
    }"#;

    let err = GraphFile::from_json(json).unwrap_err();

    assert!(matches!(err, GraphError::InvertedRange { from: 0x7A, to: 0x61, .. }));
    insta::assert_snapshot!(err.to_string(), @"node `t`: range start 0x007a is above its end 0x0061");
}

#[test]
fn duplicate_node_name_is_rejected() {
    let json = r#"{
        "nodes": {
            "a": { "type": "text", "elements": [{ "atom": "x" }], "on_success": "b" },
            "b": { "type": "end" },
            "a": { "type": "end" }
        }
    }"#;

    let err = GraphFile::from_json(json).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"node `a` is defined more than once");
}

#[test]
fn nodes_must_be_a_map() {
    let err = GraphFile::from_json(r#"{ "nodes": [] }"#).unwrap_err();

    assert!(matches!(err, GraphError::Json(_)));
}
