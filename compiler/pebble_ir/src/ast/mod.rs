//! Syntax tree for Pebble programs.
//!
//! Both [`Expr`] and [`Stmt`] are closed enums. The evaluator matches them
//! exhaustively, so adding a node kind is a compile error until every
//! consumer handles it. Trees arriving from outside the process go through
//! [`crate::node`] first. A parser node that does not lower becomes an
//! `Invalid` node carrying its [`NodeError`](crate::NodeError), raised only
//! when evaluation reaches it.
//!
//! # Module Structure
//!
//! - `expr`: literals, variables, binary operations
//! - `operators`: [`BinaryOp`] and its [`OpCategory`]
//! - `stmt`: declarations, assignments, `if`, `while`, `print`

mod expr;
mod operators;
mod stmt;

pub use expr::Expr;
pub use operators::{BinaryOp, OpCategory};
pub use stmt::Stmt;

#[cfg(test)]
mod tests;
