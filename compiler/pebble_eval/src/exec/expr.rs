//! Expression evaluation.

use pebble_ir::Expr;
use pebble_stack::ensure_sufficient_stack;

use crate::errors::{invalid_node, undefined_variable, EvalResult};
use crate::{evaluate_binary, Environment, Value};

/// Evaluate `expr` against the current scope of `env`.
///
/// Takes `&Environment`: evaluation reads bindings and never changes them,
/// so evaluating the same expression twice with no statement in between
/// gives the same result. Both operands of a binary node are evaluated,
/// left first, before the operator looks at either.
pub fn evaluate(env: &Environment, expr: &Expr) -> EvalResult {
    ensure_sufficient_stack(|| match expr {
        Expr::Number(n) => Ok(Value::Number(*n)),
        Expr::Boolean(b) => Ok(Value::Bool(*b)),
        Expr::Variable(name) => env.lookup(name).ok_or_else(|| undefined_variable(name)),
        Expr::Binary { op, left, right } => {
            let left = evaluate(env, left)?;
            let right = evaluate(env, right)?;
            evaluate_binary(left, right, *op)
        }
        Expr::InvalidBinary { error, left, right } => {
            evaluate(env, left)?;
            evaluate(env, right)?;
            Err(invalid_node(error))
        }
        Expr::Invalid(error) => Err(invalid_node(error)),
    })
}
