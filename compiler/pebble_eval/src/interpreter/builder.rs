//! `InterpreterBuilder` for creating configured interpreters.

use super::Interpreter;
use crate::eval_mode::{EvalMode, ModeState};
use crate::print_handler::{silent_handler, stdout_handler, SharedPrintHandler};
use crate::Environment;

/// Builder for [`Interpreter`].
///
/// ```text
/// let output = buffer_handler();
/// let mut interp = InterpreterBuilder::new()
///     .mode(EvalMode::Bounded { max_loop_iterations: 10_000, max_depth: 64 })
///     .print_handler(output.clone())
///     .build();
/// ```
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    mode: EvalMode,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    /// A builder for an `Interpret`-mode interpreter with an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Start from an existing environment instead of an empty root. Its root
    /// bindings also seed every [`Interpreter::run`].
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` output goes. Overrides the mode's default.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        let print_handler = self.print_handler.unwrap_or_else(|| {
            if self.mode.allows_io() {
                stdout_handler()
            } else {
                silent_handler()
            }
        });
        let env = self.env.unwrap_or_default();
        Interpreter {
            seed: env.root(),
            env,
            mode_state: ModeState::new(&self.mode),
            mode: self.mode,
            print_handler,
        }
    }
}
