//! Stack growth for recursive tree walks.
//!
//! Evaluating `((((1 + 1) + 1) + 1) ...)` or a tower of nested `if` blocks
//! recurses once per level. Wrapping each level in [`ensure_sufficient_stack`]
//! lets the walk go arbitrarily deep on native targets: when fewer than
//! [`RED_ZONE`] bytes of stack remain, a fresh [`STACK_PER_RECURSION`] segment
//! is allocated before the closure runs.
//!
//! On `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
///
/// ```text
/// fn eval(&self, expr: &Expr) -> EvalResult {
///     ensure_sufficient_stack(|| match expr {
///         Expr::Binary { left, right, .. } => { self.eval(left)?; ... }
///         ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
