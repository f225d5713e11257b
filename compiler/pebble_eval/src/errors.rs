//! Evaluation errors.
//!
//! Every failure the evaluator can raise is an [`EvalErrorKind`] variant with
//! the data needed to explain it. Code elsewhere in the crate builds errors
//! through the factory functions at the bottom of this module, so the
//! wording lives in one place.

use pebble_ir::{BinaryOp, NodeError, OpCategory};

use crate::environment::BindingError;
use crate::value::{Value, ValueKind};

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Result of executing a statement.
pub type ExecResult = Result<(), EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Bindings
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("variable already declared in this scope: {name}")]
    DuplicateDeclaration { name: String },

    // Operators
    #[error("operator `{op}` expects {expected} operands, got {left} and {right}")]
    TypeMismatch {
        op: BinaryOp,
        expected: ValueKind,
        left: ValueKind,
        right: ValueKind,
    },
    #[error("division by zero")]
    DivisionByZero,

    // Control flow
    #[error("`{construct}` condition must be a boolean, got {got}")]
    NonBooleanCondition {
        construct: &'static str,
        got: ValueKind,
    },

    // Malformed input trees
    #[error("unknown operator `{symbol}`")]
    UnknownOperator { symbol: String },
    #[error("unknown expression kind `{kind}`")]
    UnknownExpression { kind: String },
    #[error("unknown statement kind `{kind}`")]
    UnknownStatement { kind: String },
    #[error("malformed `{kind}` node: missing or invalid `{field}`")]
    MalformedNode { kind: String, field: &'static str },
    #[error("invalid program JSON: {message}")]
    InvalidProgram { message: String },

    // Limits
    #[error("loop iteration budget exceeded (limit: {limit})")]
    LoopBudgetExceeded { limit: u64 },
    #[error("maximum block nesting depth exceeded (limit: {limit})")]
    DepthLimitExceeded { limit: usize },
}

/// Evaluation error.
///
/// Aborts the whole run. Side effects that happened before it (printed
/// lines, completed assignments) stay in place.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured category, for matching.
    pub kind: EvalErrorKind,
    /// Human-readable message; always `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    #[inline]
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

impl From<NodeError> for EvalError {
    fn from(err: NodeError) -> Self {
        EvalError::from_kind(match err {
            NodeError::UnknownExpression { kind } => EvalErrorKind::UnknownExpression { kind },
            NodeError::UnknownOperator { symbol } => EvalErrorKind::UnknownOperator { symbol },
            NodeError::UnknownStatement { kind } => EvalErrorKind::UnknownStatement { kind },
            NodeError::MalformedNode { kind, field } => EvalErrorKind::MalformedNode { kind, field },
            NodeError::InvalidJson { message } => EvalErrorKind::InvalidProgram { message },
        })
    }
}

// Binding errors

pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
    .into()
}

pub fn duplicate_declaration(name: &str) -> EvalError {
    EvalErrorKind::DuplicateDeclaration {
        name: name.to_string(),
    }
    .into()
}

/// Map a scope-level failure onto the error for `name`.
pub fn binding_error(err: BindingError, name: &str) -> EvalError {
    match err {
        BindingError::AlreadyDeclared => duplicate_declaration(name),
        BindingError::Undefined => undefined_variable(name),
    }
}

// Operator errors

/// Operand kinds do not fit `op`. The expected kind follows from the
/// operator's category.
pub fn type_mismatch(op: BinaryOp, left: ValueKind, right: ValueKind) -> EvalError {
    let expected = match op.category() {
        OpCategory::Logical => ValueKind::Bool,
        OpCategory::Arithmetic | OpCategory::Relational | OpCategory::Equality => {
            ValueKind::Number
        }
    };
    EvalErrorKind::TypeMismatch {
        op,
        expected,
        left,
        right,
    }
    .into()
}

pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

// Control flow errors

pub fn non_boolean_condition(construct: &'static str, got: ValueKind) -> EvalError {
    EvalErrorKind::NonBooleanCondition { construct, got }.into()
}

// Malformed input trees

/// The error carried by a parser node that did not lower.
pub fn invalid_node(error: &NodeError) -> EvalError {
    EvalError::from(error.clone())
}

// Limit errors

pub fn loop_budget_exceeded(limit: u64) -> EvalError {
    EvalErrorKind::LoopBudgetExceeded { limit }.into()
}

pub fn depth_limit_exceeded(limit: usize) -> EvalError {
    EvalErrorKind::DepthLimitExceeded { limit }.into()
}
