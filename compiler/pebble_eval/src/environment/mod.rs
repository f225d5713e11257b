//! Lexical scopes for the interpreter.
//!
//! A [`Scope`] owns its bindings and points at its parent. Lookup and
//! assignment walk that chain outward until they reach a scope that owns the
//! name; declaration only ever touches the innermost scope.
//!
//! [`Environment`] keeps the stack of scopes that are currently open. Blocks
//! push a child on entry and pop it on exit, so a child never outlives the
//! statement list that created it. The root is never popped and is what a
//! program run hands back.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use pebble_ir::Name;

use crate::Value;

/// Why a scope operation failed.
///
/// Carries no name; the caller turns it into an `EvalError` for the name it
/// was working on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingError {
    /// `declare` on a name this scope already owns.
    AlreadyDeclared,
    /// `assign` on a name no scope in the chain owns.
    Undefined,
}

/// Shared handle to a single-threaded scope.
///
/// Children hold one of these to reach their parent. `Rc` keeps the whole
/// structure `!Send`, which matches the interpreter: one thread, one path
/// through the scopes at a time.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One scope: its own bindings plus an optional parent.
///
/// Equality compares bindings only. Two scopes with the same names bound to
/// equal values are equal regardless of where they sit in a chain, which is
/// what a caller comparing a program's final state wants.
#[derive(Clone, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// A parentless scope.
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Build a parentless scope from `(name, value)` pairs.
    ///
    /// Later pairs overwrite earlier ones with the same name.
    pub fn from_bindings<N, V, I>(bindings: I) -> Self
    where
        N: Into<Name>,
        V: Into<Value>,
        I: IntoIterator<Item = (N, V)>,
    {
        Scope {
            bindings: bindings
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            parent: None,
        }
    }

    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Whether this scope itself binds `name`. Ancestors are not consulted.
    #[inline]
    pub fn owns(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// The value bound to `name` in this scope only.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).copied()
    }

    /// Bind `name` in this scope.
    pub fn declare(&mut self, name: Name, value: Value) -> Result<(), BindingError> {
        if self.bindings.contains_key(&name) {
            return Err(BindingError::AlreadyDeclared);
        }
        self.bindings.insert(name, value);
        Ok(())
    }

    /// Resolve `name` through this scope and its ancestors.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(*value);
        }
        let mut next = self.parent.clone();
        while let Some(scope) = next {
            let scope = scope.borrow();
            if let Some(value) = scope.bindings.get(name) {
                return Some(*value);
            }
            next = scope.parent.clone();
        }
        None
    }

    /// Overwrite the nearest binding of `name`, which may live in an ancestor.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), BindingError> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        let mut next = self.parent.clone();
        while let Some(scope) = next {
            let mut scope = scope.borrow_mut();
            if let Some(slot) = scope.bindings.get_mut(name) {
                *slot = value;
                return Ok(());
            }
            next = scope.parent.clone();
        }
        Err(BindingError::Undefined)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// This scope's own bindings, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, Value)> {
        let mut entries: Vec<_> = self.bindings.iter().map(|(k, v)| (k, *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// A parentless copy of this scope's own bindings.
    pub fn detached(&self) -> Scope {
        Scope {
            bindings: self.bindings.clone(),
            parent: None,
        }
    }
}

impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in self.iter() {
            map.entry(&name.as_str(), &value);
        }
        map.finish()
    }
}

/// The stack of open scopes, innermost last.
pub struct Environment {
    scopes: Vec<LocalScope<Scope>>,
    root: LocalScope<Scope>,
}

impl Environment {
    /// An environment holding only an empty root scope.
    pub fn new() -> Self {
        Environment::with_root(Scope::new())
    }

    /// Start from pre-populated root bindings. Any parent `root` has is dropped.
    pub fn with_root(root: Scope) -> Self {
        let root = LocalScope::new(root.detached());
        Environment {
            scopes: vec![root.clone()],
            root,
        }
    }

    /// Number of open scopes, root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Open a child of the current scope.
    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current().clone();
        self.scopes.push(LocalScope::new(Scope::with_parent(parent)));
    }

    /// Close the current scope. The root stays open.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    #[inline]
    fn current(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.root)
    }

    /// Declare `name` in the current scope.
    #[inline]
    pub fn declare(&mut self, name: Name, value: Value) -> Result<(), BindingError> {
        self.current().borrow_mut().declare(name, value)
    }

    /// Resolve `name` from the current scope outward.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.current().borrow().lookup(name)
    }

    /// Assign to the nearest enclosing binding of `name`.
    #[inline]
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), BindingError> {
        self.current().borrow_mut().assign(name, value)
    }

    /// Whether the current scope itself binds `name`.
    #[inline]
    pub fn current_owns(&self, name: &str) -> bool {
        self.current().borrow().owns(name)
    }

    /// Copy of the root scope's bindings.
    pub fn root(&self) -> Scope {
        self.root.borrow().detached()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
