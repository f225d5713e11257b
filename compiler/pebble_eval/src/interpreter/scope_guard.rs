//! RAII scope guard for block execution.
//!
//! [`ScopedInterpreter`] opens a child scope when created and closes it in
//! `Drop`. Closing therefore happens on every way out of a block: normal
//! completion, an error returned through `?`, or a panic unwinding through
//! the guard.
//!
//! The guard holds `&mut Interpreter` and derefs to it, so code inside a
//! block calls interpreter methods on the guard directly:
//!
//! ```text
//! interpreter.with_env_scope(|scoped| scoped.exec_all(body))
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// An interpreter with one extra scope open until the guard drops.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
        tracing::debug!(depth = self.interpreter.env.depth(), "scope closed");
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Open a child scope that closes when the returned guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        tracing::debug!(depth = self.env.depth(), "scope opened");
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a child scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
