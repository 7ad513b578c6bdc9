//! Lexical scopes.
//!
//! An [`Environment`] is a handle to one shared, mutable binding table.
//! Entering a new scope (a call, `let`, a `catch` handler) makes a complete,
//! independent copy of the enclosing table with [`Environment::derive`];
//! assignments in the copy never reach the scope it was copied from.
//! Closures keep a handle to the table that was live when they were created,
//! so they observe later assignments made directly in that table.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::value::{LocalScope, Name, Value};

type Bindings = FxHashMap<Name, Value>;

#[derive(Clone)]
pub struct Environment(LocalScope<Bindings>);

impl Environment {
    /// An empty environment.
    pub fn new() -> Self {
        Environment(LocalScope::new(Bindings::default()))
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.0.borrow().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.borrow().contains_key(name)
    }

    /// Bind or rebind `name` in this table.
    pub fn define(&self, name: Name, value: Value) {
        self.0.borrow_mut().insert(name, value);
    }

    /// A new table holding a copy of every binding in this one.
    #[must_use]
    pub fn derive(&self) -> Environment {
        let copy = self.0.borrow().clone();
        Environment(LocalScope::new(copy))
    }

    /// Whether both handles refer to the same table.
    #[inline]
    pub fn same_scope(&self, other: &Environment) -> bool {
        LocalScope::ptr_eq(&self.0, &other.0)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.0.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.len())
            .finish()
    }
}
