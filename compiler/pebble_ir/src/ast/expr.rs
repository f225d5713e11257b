//! Expression nodes.

use std::fmt;

use pebble_stack::ensure_sufficient_stack;

use super::BinaryOp;
use crate::{Name, NodeError};

/// An expression. Evaluating one never changes program state.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal. All numbers are `f64`.
    Number(f64),
    /// `true` / `false`.
    Boolean(bool),
    /// Reference to a binding, resolved through the scope chain.
    Variable(Name),
    /// `left op right`. Both sides are always evaluated, left first.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// An `operator` node whose symbol did not lower. Both sides are still
    /// evaluated, left first, and only then is `error` raised.
    InvalidBinary {
        error: NodeError,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// A parser node that did not lower. Evaluating it raises `error`.
    Invalid(NodeError),
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Boolean(value)
    }

    pub fn var(name: impl Into<Name>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The node kind as the external parser spells it.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number",
            Expr::Boolean(_) => "boolean",
            Expr::Variable(_) => "variable",
            Expr::Binary { .. } | Expr::InvalidBinary { .. } => "operator",
            Expr::Invalid(_) => "invalid",
        }
    }

    /// The first lowering error in evaluation order, if any.
    pub fn first_error(&self) -> Option<&NodeError> {
        ensure_sufficient_stack(|| match self {
            Expr::Number(_) | Expr::Boolean(_) | Expr::Variable(_) => None,
            Expr::Binary { left, right, .. } => left.first_error().or_else(|| right.first_error()),
            Expr::InvalidBinary { error, left, right } => left
                .first_error()
                .or_else(|| right.first_error())
                .or(Some(error)),
            Expr::Invalid(error) => Some(error),
        })
    }

    fn fmt_with_parent(&self, f: &mut fmt::Formatter<'_>, parent: Option<u8>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Boolean(b) => write!(f, "{b}"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Binary { op, left, right } => {
                let prec = op.precedence();
                // Operators are left-associative: a right child at the same
                // level needs parentheses, a left child does not.
                let wrap = parent.is_some_and(|p| prec >= p);
                if wrap {
                    f.write_str("(")?;
                }
                left.fmt_with_parent(f, Some(prec + 1))?;
                write!(f, " {op} ")?;
                right.fmt_with_parent(f, Some(prec))?;
                if wrap {
                    f.write_str(")")?;
                }
                Ok(())
            }
            Expr::InvalidBinary { error, left, right } => {
                let symbol = match error {
                    NodeError::UnknownOperator { symbol } => symbol.as_str(),
                    _ => "?",
                };
                f.write_str("(")?;
                left.fmt_with_parent(f, None)?;
                write!(f, " {symbol} ")?;
                right.fmt_with_parent(f, None)?;
                f.write_str(")")
            }
            Expr::Invalid(error) => write!(f, "<{error}>"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_parent(f, None)
    }
}
