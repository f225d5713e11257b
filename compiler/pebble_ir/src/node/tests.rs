#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn expr_json(text: &str) -> Expr {
    let node: ExprNode = serde_json::from_str(text).unwrap();
    lower_expr(&node)
}

#[test]
fn lowers_literals_and_variables() {
    assert_eq!(expr_json(r#"{"kind":"number","value":28}"#), Expr::number(28.0));
    assert_eq!(expr_json(r#"{"kind":"number","value":2.5}"#), Expr::number(2.5));
    assert_eq!(expr_json(r#"{"kind":"boolean","value":false}"#), Expr::boolean(false));
    assert_eq!(expr_json(r#"{"kind":"variable","name":"x"}"#), Expr::var("x"));
}

#[test]
fn lowers_operator_tree() {
    let lowered = expr_json(
        r#"{"kind":"operator","operator":"*",
            "left":{"kind":"variable","name":"x"},
            "right":{"kind":"number","value":2}}"#,
    );
    assert_eq!(
        lowered,
        Expr::binary(BinaryOp::Mul, Expr::var("x"), Expr::number(2.0))
    );
}

#[test]
fn unknown_operator_keeps_operands() {
    let lowered = expr_json(
        r#"{"kind":"operator","operator":"^^",
            "left":{"kind":"variable","name":"y"},
            "right":{"kind":"number","value":1}}"#,
    );
    assert_eq!(
        lowered,
        Expr::InvalidBinary {
            error: NodeError::UnknownOperator {
                symbol: "^^".to_string()
            },
            left: Box::new(Expr::var("y")),
            right: Box::new(Expr::number(1.0)),
        }
    );
    assert_eq!(lowered.kind_name(), "operator");
    assert_eq!(lowered.to_string(), "(y ^^ 1)");
}

#[test]
fn operand_errors_come_before_operator_errors() {
    let lowered = expr_json(
        r#"{"kind":"operator","operator":"^^",
            "left":{"kind":"string","value":1},
            "right":{"kind":"number","value":2}}"#,
    );
    assert_eq!(
        lowered.first_error(),
        Some(&NodeError::UnknownExpression {
            kind: "string".to_string()
        })
    );
}

#[test]
fn literal_with_wrong_payload_is_malformed() {
    assert_eq!(
        expr_json(r#"{"kind":"number","value":true}"#),
        Expr::Invalid(NodeError::MalformedNode {
            kind: "number".to_string(),
            field: "value"
        })
    );
    assert_eq!(
        expr_json(r#"{"kind":"variable"}"#),
        Expr::Invalid(NodeError::MalformedNode {
            kind: "variable".to_string(),
            field: "name"
        })
    );
}

#[test]
fn missing_operand_becomes_invalid_operand() {
    let lowered = expr_json(r#"{"kind":"operator","operator":"+","right":{"kind":"number","value":2}}"#);
    assert_eq!(
        lowered,
        Expr::binary(
            BinaryOp::Add,
            Expr::Invalid(NodeError::MalformedNode {
                kind: "operator".to_string(),
                field: "left"
            }),
            Expr::number(2.0),
        )
    );
}

#[test]
fn lowers_full_program() {
    let program = program_from_json(
        r#"[
            {"kind":"let","name":"i","expression":{"kind":"number","value":0}},
            {"kind":"while",
             "test":{"kind":"operator","operator":"<",
                     "left":{"kind":"variable","name":"i"},
                     "right":{"kind":"number","value":3}},
             "body":[
                {"kind":"assignment","name":"i",
                 "expression":{"kind":"operator","operator":"+",
                               "left":{"kind":"variable","name":"i"},
                               "right":{"kind":"number","value":1}}}
             ]},
            {"kind":"if","test":{"kind":"boolean","value":true},
             "truePart":[{"kind":"print","expression":{"kind":"variable","name":"i"}}],
             "falsePart":[]}
        ]"#,
    )
    .unwrap();

    let expected = vec![
        Stmt::let_("i", Expr::number(0.0)),
        Stmt::while_(
            Expr::binary(BinaryOp::Lt, Expr::var("i"), Expr::number(3.0)),
            vec![Stmt::assign(
                "i",
                Expr::binary(BinaryOp::Add, Expr::var("i"), Expr::number(1.0)),
            )],
        ),
        Stmt::if_else(
            Expr::boolean(true),
            vec![Stmt::print(Expr::var("i"))],
            vec![],
        ),
    ];
    assert_eq!(validate_program(&program), Ok(()));
    assert_eq!(program, expected);
}

#[test]
fn missing_false_part_is_empty_else() {
    let program = program_from_json(
        r#"[{"kind":"if","test":{"kind":"boolean","value":true},"truePart":[]}]"#,
    )
    .unwrap();
    assert_eq!(program, vec![Stmt::if_else(Expr::boolean(true), vec![], vec![])]);
}

#[test]
fn missing_true_part_fails_inside_the_branch() {
    let program =
        program_from_json(r#"[{"kind":"if","test":{"kind":"boolean","value":true}}]"#).unwrap();
    let malformed = NodeError::MalformedNode {
        kind: "if".to_string(),
        field: "truePart",
    };
    assert_eq!(
        program,
        vec![Stmt::if_else(
            Expr::boolean(true),
            vec![Stmt::Invalid(malformed.clone())],
            vec![],
        )]
    );
    assert_eq!(validate_program(&program), Err(malformed));
}

#[test]
fn missing_name_invalidates_statement() {
    let program =
        program_from_json(r#"[{"kind":"let","expression":{"kind":"number","value":1}}]"#).unwrap();
    assert_eq!(
        program,
        vec![Stmt::Invalid(NodeError::MalformedNode {
            kind: "let".to_string(),
            field: "name"
        })]
    );
}

#[test]
fn validation_reports_first_error_in_source_order() {
    let program = program_from_json(
        r#"[{"kind":"print","expression":{"kind":"number","value":1}},
            {"kind":"while","test":{"kind":"boolean","value":false},
             "body":[{"kind":"return"}]},
            {"kind":"loop"}]"#,
    )
    .unwrap();
    assert_eq!(program.len(), 3);
    assert_eq!(
        validate_program(&program),
        Err(NodeError::UnknownStatement {
            kind: "return".to_string()
        })
    );
}

#[test]
fn invalid_json_is_reported() {
    let result = program_from_json("[{");
    assert!(matches!(result, Err(NodeError::InvalidJson { .. })));
}

#[test]
fn ast_to_node_and_back() {
    let program = vec![
        Stmt::let_("x", Expr::number(1.0)),
        Stmt::if_else(
            Expr::binary(BinaryOp::StrictEq, Expr::var("x"), Expr::number(1.0)),
            vec![Stmt::let_("x", Expr::number(99.0))],
            vec![Stmt::assign("x", Expr::boolean(false))],
        ),
        Stmt::print(Expr::var("x")),
    ];
    let nodes: Vec<StmtNode> = program.iter().map(StmtNode::from).collect();
    let json = serde_json::to_string(&nodes).unwrap();
    assert!(json.contains(r#""truePart""#));
    assert_eq!(program_from_json(&json).unwrap(), program);
}

#[test]
fn invalid_nodes_convert_back_to_their_records() {
    let program = vec![
        Stmt::Invalid(NodeError::UnknownStatement {
            kind: "return".to_string(),
        }),
        Stmt::print(Expr::InvalidBinary {
            error: NodeError::UnknownOperator {
                symbol: "^^".to_string(),
            },
            left: Box::new(Expr::number(1.0)),
            right: Box::new(Expr::number(2.0)),
        }),
    ];
    let nodes: Vec<StmtNode> = program.iter().map(StmtNode::from).collect();
    assert_eq!(lower_program(&nodes), program);
}
