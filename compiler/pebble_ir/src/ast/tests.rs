use super::*;
use crate::NodeError;
use pretty_assertions::assert_eq;

#[test]
fn symbols_round_trip() {
    for op in BinaryOp::ALL {
        assert_eq!(BinaryOp::from_symbol(op.as_symbol()), Some(op));
    }
}

#[test]
fn unknown_symbols_are_rejected() {
    assert_eq!(BinaryOp::from_symbol("^^"), None);
    assert_eq!(BinaryOp::from_symbol("=="), None);
    assert_eq!(BinaryOp::from_symbol(""), None);
}

#[test]
fn categories() {
    assert_eq!(BinaryOp::Div.category(), OpCategory::Arithmetic);
    assert_eq!(BinaryOp::Gt.category(), OpCategory::Relational);
    assert_eq!(BinaryOp::StrictEq.category(), OpCategory::Equality);
    assert_eq!(BinaryOp::Or.category(), OpCategory::Logical);
}

#[test]
fn display_respects_precedence() {
    // a * b + 1
    let expr = Expr::binary(
        BinaryOp::Add,
        Expr::binary(BinaryOp::Mul, Expr::var("a"), Expr::var("b")),
        Expr::number(1.0),
    );
    assert_eq!(expr.to_string(), "a * b + 1");

    // (a + b) * 2
    let expr = Expr::binary(
        BinaryOp::Mul,
        Expr::binary(BinaryOp::Add, Expr::var("a"), Expr::var("b")),
        Expr::number(2.0),
    );
    assert_eq!(expr.to_string(), "(a + b) * 2");
}

#[test]
fn display_keeps_right_nested_parens() {
    // 10 - (4 - 1)
    let expr = Expr::binary(
        BinaryOp::Sub,
        Expr::number(10.0),
        Expr::binary(BinaryOp::Sub, Expr::number(4.0), Expr::number(1.0)),
    );
    assert_eq!(expr.to_string(), "10 - (4 - 1)");

    // 10 - 4 - 1
    let expr = Expr::binary(
        BinaryOp::Sub,
        Expr::binary(BinaryOp::Sub, Expr::number(10.0), Expr::number(4.0)),
        Expr::number(1.0),
    );
    assert_eq!(expr.to_string(), "10 - 4 - 1");
}

#[test]
fn kind_names_match_parser_tags() {
    assert_eq!(Expr::boolean(true).kind_name(), "boolean");
    assert_eq!(
        Expr::binary(BinaryOp::And, Expr::boolean(true), Expr::boolean(false)).kind_name(),
        "operator"
    );
    assert_eq!(Stmt::assign("x", Expr::number(1.0)).kind_name(), "assignment");
    assert_eq!(Stmt::while_(Expr::boolean(false), vec![]).kind_name(), "while");
}

#[test]
fn invalid_nodes_report_their_error() {
    let error = NodeError::UnknownExpression {
        kind: "string".to_string(),
    };
    let expr = Expr::binary(
        BinaryOp::Add,
        Expr::number(1.0),
        Expr::Invalid(error.clone()),
    );
    assert_eq!(expr.first_error(), Some(&error));
    assert_eq!(Expr::number(1.0).first_error(), None);

    let stmt = Stmt::while_(Expr::boolean(false), vec![Stmt::print(expr)]);
    assert_eq!(stmt.first_error(), Some(&error));
    assert_eq!(Stmt::Invalid(error.clone()).kind_name(), "invalid");
}
