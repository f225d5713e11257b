//! Statement nodes.

use pebble_stack::ensure_sufficient_stack;

use super::Expr;
use crate::{Name, NodeError};

/// A statement.
///
/// `If` branches and `While` bodies are blocks: each run of one gets its own
/// child scope.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `let name = init;` declares `name` in the current scope.
    Let { name: Name, init: Expr },
    /// `name = value;` overwrites the nearest enclosing binding of `name`.
    Assign { name: Name, value: Expr },
    /// `if (test) { then_branch } else { else_branch }`
    If {
        test: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Vec<Stmt>,
    },
    /// `while (test) { body }`
    While { test: Expr, body: Vec<Stmt> },
    /// `print(expr);`
    Print(Expr),
    /// A parser node that did not lower. Executing it raises `error`.
    Invalid(NodeError),
}

impl Stmt {
    pub fn let_(name: impl Into<Name>, init: Expr) -> Self {
        Stmt::Let {
            name: name.into(),
            init,
        }
    }

    pub fn assign(name: impl Into<Name>, value: Expr) -> Self {
        Stmt::Assign {
            name: name.into(),
            value,
        }
    }

    pub fn if_else(test: Expr, then_branch: Vec<Stmt>, else_branch: Vec<Stmt>) -> Self {
        Stmt::If {
            test,
            then_branch,
            else_branch,
        }
    }

    pub fn while_(test: Expr, body: Vec<Stmt>) -> Self {
        Stmt::While { test, body }
    }

    pub fn print(expr: Expr) -> Self {
        Stmt::Print(expr)
    }

    /// The node kind as the external parser spells it.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Let { .. } => "let",
            Stmt::Assign { .. } => "assignment",
            Stmt::If { .. } => "if",
            Stmt::While { .. } => "while",
            Stmt::Print(_) => "print",
            Stmt::Invalid(_) => "invalid",
        }
    }

    /// The first lowering error in source order, if any. Both branches of an
    /// `if` and the body of a `while` are searched whether or not they would
    /// run.
    pub fn first_error(&self) -> Option<&NodeError> {
        ensure_sufficient_stack(|| match self {
            Stmt::Let { init: expr, .. } | Stmt::Assign { value: expr, .. } | Stmt::Print(expr) => {
                expr.first_error()
            }
            Stmt::If {
                test,
                then_branch,
                else_branch,
            } => test
                .first_error()
                .or_else(|| then_branch.iter().find_map(Stmt::first_error))
                .or_else(|| else_branch.iter().find_map(Stmt::first_error)),
            Stmt::While { test, body } => test
                .first_error()
                .or_else(|| body.iter().find_map(Stmt::first_error)),
            Stmt::Invalid(error) => Some(error),
        })
    }
}
