//! Pebble Eval - tree-walking evaluator for Pebble programs.
//!
//! Pebble has number and boolean expressions, and `let`, assignment, `if`,
//! `while` and `print` statements. Programs arrive as [`pebble_ir`] syntax
//! trees (or as parser JSON, lowered first) and run against a chain of
//! lexical scopes.
//!
//! # Architecture
//!
//! - `Environment`: the stack of open scopes; each `Scope` owns its
//!   bindings and points at its parent
//! - `evaluate`: expression evaluation, read-only over the environment
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `Interpreter`: statement execution, block scoping via
//!   `ScopedInterpreter`, print output via a `SharedPrintHandler`
//! - `EvalMode`: unbounded by default, opt-in loop and nesting limits
//!
//! # Example
//!
//! ```text
//! let root = pebble_eval::run(&[
//!     Stmt::let_("x", Expr::number(10.0)),
//!     Stmt::assign("x", Expr::number(20.0)),
//! ])?;
//! assert_eq!(root.get("x"), Some(Value::Number(20.0)));
//! ```

mod driver;
mod environment;
pub mod errors;
mod eval_mode;
pub mod exec;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

#[cfg(test)]
mod tests;

pub use driver::{execute, run, run_json, run_nodes};
pub use environment::{BindingError, Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult, ExecResult};
pub use eval_mode::EvalMode;
pub use exec::expr::evaluate;
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::{Value, ValueKind};

pub use pebble_stack::ensure_sufficient_stack;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=pebble_eval=debug` for scope and run events or
/// `RUST_LOG=pebble_eval=trace` for every statement and printed value.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
