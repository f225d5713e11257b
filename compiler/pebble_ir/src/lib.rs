//! Pebble IR - syntax tree types for the Pebble evaluator.
//!
//! This crate contains the data the evaluator consumes:
//! - [`Name`]: shared, cheaply cloned identifiers
//! - [`Expr`], [`Stmt`], [`BinaryOp`]: the closed syntax tree
//! - [`node`]: the untyped tagged-record shape a parser emits, and the
//!   lowering that turns it into the syntax tree
//!
//! The tree is immutable once built. Evaluation lives in `pebble_eval`.

pub mod ast;
mod name;
pub mod node;

pub use ast::{BinaryOp, Expr, OpCategory, Stmt};
pub use name::Name;
pub use node::{
    lower_expr, lower_program, lower_stmt, nodes_from_json, program_from_json, validate_program,
    ExprNode, Literal, NodeError, StmtNode,
};
