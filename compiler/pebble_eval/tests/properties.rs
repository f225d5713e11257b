//! Property-based tests for the evaluator.
//!
//! - Arithmetic and comparison agree with `f64`
//! - Evaluating twice against an unchanged environment gives the same value
//! - Declarations inside a block never reach the enclosing scope

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::float_cmp,
    reason = "Proptest macros generate code with these patterns"
)]

use pebble_eval::{evaluate, run, Environment, EvalErrorKind, Scope, Value};
use pebble_ir::{BinaryOp, Expr, Name, Stmt};
use proptest::prelude::*;

// -- Strategies --

fn finite() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::ZERO
}

fn identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,8}").expect("valid regex")
}

/// Expressions over `x`, `y` and small number literals, possibly ill-typed.
fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (-100.0..100.0f64).prop_map(Expr::number),
        any::<bool>().prop_map(Expr::boolean),
        Just(Expr::var("x")),
        Just(Expr::var("y")),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        (prop::sample::select(BinaryOp::ALL.to_vec()), inner.clone(), inner)
            .prop_map(|(op, left, right)| Expr::binary(op, left, right))
    })
}

fn env_xy(x: f64, y: bool) -> Environment {
    let mut env = Environment::new();
    env.declare(Name::from("x"), Value::Number(x)).unwrap();
    env.declare(Name::from("y"), Value::Bool(y)).unwrap();
    env
}

fn eval_op(op: BinaryOp, a: f64, b: f64) -> Result<Value, EvalErrorKind> {
    evaluate(
        &Environment::new(),
        &Expr::binary(op, Expr::number(a), Expr::number(b)),
    )
    .map_err(|e| e.kind)
}

// -- Properties --

proptest! {
    #[test]
    fn arithmetic_matches_f64(a in finite(), b in finite()) {
        prop_assert_eq!(eval_op(BinaryOp::Add, a, b), Ok(Value::Number(a + b)));
        prop_assert_eq!(eval_op(BinaryOp::Sub, a, b), Ok(Value::Number(a - b)));
        prop_assert_eq!(eval_op(BinaryOp::Mul, a, b), Ok(Value::Number(a * b)));
        if b == 0.0 {
            prop_assert_eq!(eval_op(BinaryOp::Div, a, b), Err(EvalErrorKind::DivisionByZero));
        } else {
            prop_assert_eq!(eval_op(BinaryOp::Div, a, b), Ok(Value::Number(a / b)));
        }
    }

    #[test]
    fn comparisons_match_f64(a in finite(), b in finite()) {
        prop_assert_eq!(eval_op(BinaryOp::Lt, a, b), Ok(Value::Bool(a < b)));
        prop_assert_eq!(eval_op(BinaryOp::Gt, a, b), Ok(Value::Bool(a > b)));
        prop_assert_eq!(eval_op(BinaryOp::StrictEq, a, b), Ok(Value::Bool(a == b)));
    }

    #[test]
    fn division_by_zero_ignores_left(a in finite()) {
        prop_assert_eq!(eval_op(BinaryOp::Div, a, 0.0), Err(EvalErrorKind::DivisionByZero));
        prop_assert_eq!(eval_op(BinaryOp::Div, a, -0.0), Err(EvalErrorKind::DivisionByZero));
    }

    #[test]
    fn evaluation_is_repeatable(e in expr(), x in -50.0..50.0f64, y in any::<bool>()) {
        let env = env_xy(x, y);
        let first = evaluate(&env, &e);
        let second = evaluate(&env, &e);
        // NaN results compare unequal to themselves, so compare their text.
        prop_assert_eq!(format!("{first:?}"), format!("{second:?}"));
        prop_assert_eq!(env.depth(), 1);
        prop_assert_eq!(env.lookup("x"), Some(Value::Number(x)));
    }

    #[test]
    fn block_declarations_never_leak(
        name in identifier(),
        outer in -1000.0..1000.0f64,
        inner in -1000.0..1000.0f64,
        take_branch in any::<bool>(),
    ) {
        let root = run(&[
            Stmt::let_(name.as_str(), Expr::number(outer)),
            Stmt::if_else(
                Expr::boolean(take_branch),
                vec![Stmt::let_(name.as_str(), Expr::number(inner))],
                vec![Stmt::let_(name.as_str(), Expr::number(inner))],
            ),
        ])
        .unwrap();
        prop_assert_eq!(root, Scope::from_bindings([(name.as_str(), outer)]));
    }

    #[test]
    fn assignment_in_block_reaches_root(
        name in identifier(),
        outer in -1000.0..1000.0f64,
        inner in -1000.0..1000.0f64,
    ) {
        let root = run(&[
            Stmt::let_(name.as_str(), Expr::number(outer)),
            Stmt::if_else(
                Expr::boolean(true),
                vec![Stmt::assign(name.as_str(), Expr::number(inner))],
                vec![],
            ),
        ])
        .unwrap();
        prop_assert_eq!(root, Scope::from_bindings([(name.as_str(), inner)]));
    }
}
