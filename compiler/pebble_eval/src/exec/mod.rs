//! Evaluation helpers that need nothing but an [`Environment`](crate::Environment).
//!
//! - `expr` - expression evaluation

pub mod expr;
