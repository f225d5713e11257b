//! Binary operator implementations for the evaluator.
//!
//! Dispatch is a single `match` on the operator. Operand checks are per
//! group: arithmetic and relational operators take numbers, logical
//! operators take booleans, `===` takes anything. Operands arrive already
//! evaluated, so `&&` and `||` never short-circuit.

use pebble_ir::BinaryOp;

use crate::errors::{division_by_zero, type_mismatch, EvalError, EvalResult};
use crate::Value;

/// Both operands as numbers, or a type mismatch for `op`.
#[inline]
fn numbers(left: Value, right: Value, op: BinaryOp) -> Result<(f64, f64), EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((a, b)),
        _ => Err(type_mismatch(op, left.kind(), right.kind())),
    }
}

/// Both operands as booleans, or a type mismatch for `op`.
#[inline]
fn booleans(left: Value, right: Value, op: BinaryOp) -> Result<(bool, bool), EvalError> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok((a, b)),
        _ => Err(type_mismatch(op, left.kind(), right.kind())),
    }
}

/// Evaluate `left op right`.
///
/// Division is IEEE-754 `f64` division. A zero divisor (`0` or `-0`) is an
/// error whatever the dividend is, so `Infinity` and `NaN` never come out of
/// `/` directly.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => numbers(left, right, op).map(|(a, b)| Value::Number(a + b)),
        BinaryOp::Sub => numbers(left, right, op).map(|(a, b)| Value::Number(a - b)),
        BinaryOp::Mul => numbers(left, right, op).map(|(a, b)| Value::Number(a * b)),
        BinaryOp::Div => {
            let (a, b) = numbers(left, right, op)?;
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(Value::Number(a / b))
            }
        }
        BinaryOp::Lt => numbers(left, right, op).map(|(a, b)| Value::Bool(a < b)),
        BinaryOp::Gt => numbers(left, right, op).map(|(a, b)| Value::Bool(a > b)),
        BinaryOp::StrictEq => Ok(Value::Bool(left == right)),
        BinaryOp::And => booleans(left, right, op).map(|(a, b)| Value::Bool(a && b)),
        BinaryOp::Or => booleans(left, right, op).map(|(a, b)| Value::Bool(a || b)),
    }
}
