//! Tree-walking interpreter for Pebble.
//!
//! An [`Interpreter`] owns the [`Environment`], the print destination and
//! the per-run counters of its [`EvalMode`]. Expressions are evaluated by
//! [`crate::exec::expr::evaluate`] against the current scope; statements are
//! executed here.
//!
//! # Blocks
//!
//! `if` branches and `while` bodies run inside [`Interpreter::with_env_scope`],
//! which opens a child scope and closes it when the block finishes, fails or
//! panics. A `while` opens a fresh child for every iteration, so nothing
//! declared in the body survives into the next one. The loop condition is
//! evaluated in the enclosing scope, never in a body scope.

mod builder;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use pebble_ir::{Expr, Stmt};
use pebble_stack::ensure_sufficient_stack;

use crate::errors::{
    binding_error, invalid_node, non_boolean_condition, EvalResult, ExecResult,
};
use crate::eval_mode::{EvalMode, ModeState};
use crate::exec::expr::evaluate;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalError, Scope, Value};

/// Tree-walking interpreter.
pub struct Interpreter {
    pub(crate) env: Environment,
    /// Bindings every [`Interpreter::run`] starts from.
    pub(crate) seed: Scope,
    pub(crate) mode: EvalMode,
    pub(crate) mode_state: ModeState,
    pub(crate) print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter in `Interpret` mode with an empty root scope.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Evaluate an expression in the current scope.
    #[inline]
    pub fn eval(&self, expr: &Expr) -> EvalResult {
        evaluate(&self.env, expr)
    }

    /// Execute one statement in the current scope.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = stmt.kind_name()))]
    pub fn exec(&mut self, stmt: &Stmt) -> ExecResult {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Let { name, init } => {
                let value = self.eval(init)?;
                self.env
                    .declare(name.clone(), value)
                    .map_err(|err| binding_error(err, name))
            }
            Stmt::Assign { name, value } => {
                let value = self.eval(value)?;
                self.env
                    .assign(name, value)
                    .map_err(|err| binding_error(err, name))
            }
            Stmt::If {
                test,
                then_branch,
                else_branch,
            } => {
                let branch = if self.eval_condition(test, "if")? {
                    then_branch
                } else {
                    else_branch
                };
                self.exec_block(branch)
            }
            Stmt::While { test, body } => {
                while self.eval_condition(test, "while")? {
                    self.mode_state.count_iteration()?;
                    self.exec_block(body)?;
                }
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.eval(expr)?;
                tracing::trace!(%value, "print");
                self.print_handler.println(&value.to_string());
                Ok(())
            }
            Stmt::Invalid(error) => Err(invalid_node(error)),
        })
    }

    /// Execute statements in order in the current scope, stopping at the
    /// first failure.
    pub fn exec_all(&mut self, stmts: &[Stmt]) -> ExecResult {
        for stmt in stmts {
            self.exec(stmt)?;
        }
        Ok(())
    }

    /// Execute a program against a new root scope and return its final
    /// bindings.
    ///
    /// Every call starts from the bindings the builder was seeded with
    /// (empty by default), so running a program twice behaves like running
    /// it once. The environment of the finished run stays available through
    /// [`Interpreter::env`] until the next call. To keep building on the same
    /// root instead, use [`Interpreter::exec_all`].
    ///
    /// On failure the error is returned and no bindings are: statements that
    /// completed before it keep their effects on the environment and on the
    /// print handler.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn run(&mut self, program: &[Stmt]) -> Result<Scope, EvalError> {
        self.env = Environment::with_root(self.seed.clone());
        self.mode_state.reset();
        let result = self.exec_all(program);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "program failed");
        }
        result?;
        let root = self.env.root();
        tracing::debug!(
            bindings = root.len(),
            iterations = self.mode_state.iterations(),
            "program finished"
        );
        Ok(root)
    }

    /// Run `stmts` in a fresh child scope.
    fn exec_block(&mut self, stmts: &[Stmt]) -> ExecResult {
        self.mode_state.check_depth(self.env.depth() - 1)?;
        self.with_env_scope(|scoped| scoped.exec_all(stmts))
    }

    /// Evaluate an `if`/`while` test, which must produce a boolean.
    fn eval_condition(&self, test: &Expr, construct: &'static str) -> Result<bool, EvalError> {
        match self.eval(test)? {
            Value::Bool(b) => Ok(b),
            other => Err(non_boolean_condition(construct, other.kind())),
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn mode(&self) -> &EvalMode {
        &self.mode
    }

    /// Hand the environment back, e.g. to continue with another interpreter.
    pub fn into_env(self) -> Environment {
        self.env
    }

    /// Output captured by a buffering print handler.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
