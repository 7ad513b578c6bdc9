//! Runtime values.
//!
//! `Value` is both the evaluator's datum and the parser's output: an AST is
//! a tree of `Value::List` nodes whose leaves are symbols, numbers and
//! strings.
//!
//! Heap-backed variants wrap [`Heap<T>`], whose constructor is private to
//! this module, so every string, list and closure is created through a
//! factory method:
//!
//! ```text
//! let s = Value::string("hello");                 // OK
//! let call = Value::list(vec![Value::symbol("f")]); // OK
//! let s = Value::Str(Heap::new(...));             // ERROR: Heap::new is pub(super)
//! ```

mod builtin;
mod closure;
mod heap;
mod record;

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

pub use builtin::{Builtin, BuiltinFn, CallContext, Host};
pub use closure::{Closure, Params, RECEIVER_NAME, REST_MARKER};
pub use heap::{Heap, LocalScope};
pub use record::Record;

use crate::render;

/// Head symbol of an argument-list node, the parser's marker for a
/// parenthesised, comma-separated list that is not itself a call.
pub const ARGS_MARKER: &str = "args..";

/// A symbol or binding name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Rc<str>);

impl Name {
    pub fn new(name: &str) -> Self {
        Name(Rc::from(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Name {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name(Rc::from(name))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

/// A Prattle value.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Heap<String>),
    /// A name. Evaluates to its binding.
    Symbol(Name),
    /// An immutable ordered sequence; also every compound AST node.
    List(Heap<Vec<Value>>),
    Record(Record),
    Closure(Heap<Closure>),
    Builtin(Builtin),
}

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    pub fn symbol(name: impl Into<Name>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// An argument-list node: `(args.. item...)`.
    pub fn arg_list(items: Vec<Value>) -> Self {
        let mut list = Vec::with_capacity(items.len() + 1);
        list.push(Value::symbol(ARGS_MARKER));
        list.extend(items);
        Value::list(list)
    }

    pub fn closure(closure: Closure) -> Self {
        Value::Closure(Heap::new(closure))
    }

    pub fn record<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Record(Record::from_entries(entries))
    }

    pub fn builtin(builtin: Builtin) -> Self {
        Value::Builtin(builtin)
    }

    pub fn as_symbol(&self) -> Option<&Name> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// The head symbol of a list node, if it has one.
    pub fn head_symbol(&self) -> Option<&str> {
        match self {
            Value::List(items) => items.first().and_then(Value::as_symbol).map(Name::as_str),
            _ => None,
        }
    }

    /// Elements of an argument-list node, without the marker.
    pub fn arg_list_items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) if is_arg_marker(items.first()) => Some(&items[1..]),
            _ => None,
        }
    }

    /// Conditional truth: `nil`, `false`, `0`, `""` and `()` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Symbol(_) | Value::Record(_) | Value::Closure(_) | Value::Builtin(_) => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Record(_) => "record",
            Value::Closure(c) if c.is_macro => "macro",
            Value::Closure(_) => "function",
            Value::Builtin(_) => "builtin",
        }
    }
}

fn is_arg_marker(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Symbol(name)) if name.as_str() == ARGS_MARKER)
}

/// Drop a leading argument-list marker, if present.
pub(crate) fn strip_arg_marker(items: &[Value]) -> &[Value] {
    if is_arg_marker(items.first()) {
        &items[1..]
    } else {
        items
    }
}

impl PartialEq for Value {
    /// Strict equality: no coercion between types. Lists and records compare
    /// structurally, closures by identity, builtins by name.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self))
    }
}

/// Output form used by `print`: strings appear without quotes, everything
/// else as its S-expression rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => f.write_str(&render::render(other)),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
