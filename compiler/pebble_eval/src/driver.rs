//! Entry points that run a whole program with a default interpreter.
//!
//! Callers that need a print buffer, a bounded run or a seeded root build an
//! [`Interpreter`] with [`InterpreterBuilder`](crate::InterpreterBuilder)
//! instead.

use pebble_ir::{lower_program, program_from_json, Stmt, StmtNode};

use crate::errors::ExecResult;
use crate::{Environment, EvalError, Interpreter, InterpreterBuilder, Scope};

/// Run `program` against a fresh, empty root scope and return the root's
/// final bindings. Printed values go to stdout.
pub fn run(program: &[Stmt]) -> Result<Scope, EvalError> {
    Interpreter::new().run(program)
}

/// Lower parser output, then [`run`] it.
///
/// A node that does not lower fails only when execution reaches it, so
/// statements before it keep their effects and its operands are evaluated
/// first. Use [`validate_program`](pebble_ir::validate_program) to refuse
/// such a program before running it.
pub fn run_nodes(nodes: &[StmtNode]) -> Result<Scope, EvalError> {
    run(&lower_program(nodes))
}

/// Parse a JSON array of statement nodes, then [`run`] it. Malformed JSON
/// fails before anything runs.
pub fn run_json(text: &str) -> Result<Scope, EvalError> {
    let program = program_from_json(text)?;
    run(&program)
}

/// Execute one statement against the current scope of `env`.
///
/// The environment is lent to a default interpreter for the duration of the
/// statement and handed back afterwards, whether or not it failed.
pub fn execute(env: &mut Environment, stmt: &Stmt) -> ExecResult {
    let mut interpreter = InterpreterBuilder::new()
        .env(std::mem::take(env))
        .build();
    let result = interpreter.exec(stmt);
    *env = interpreter.into_env();
    result
}
