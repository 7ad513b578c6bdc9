use indexmap::IndexMap;

use super::{LocalScope, Value};

/// A mutable, shared, insertion-ordered map from string keys to values.
///
/// Records carry structured error payloads (`{message: ...}`), serve as the
/// targets of property access and method calls, and back each closure's
/// property bag. Copies of a record handle share storage.
#[derive(Clone)]
pub struct Record(LocalScope<IndexMap<String, Value>>);

impl Record {
    pub fn new() -> Self {
        Record(LocalScope::new(IndexMap::new()))
    }

    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        Record(LocalScope::new(map))
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Insert or overwrite `key`, keeping the original position of an
    /// existing key.
    pub fn insert(&self, key: impl Into<String>, value: Value) {
        self.0.borrow_mut().insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Snapshot of the entries in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        LocalScope::ptr_eq(&a.0, &b.0)
    }
}

impl Default for Record {
    fn default() -> Self {
        Record::new()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Record::ptr_eq(self, other) || *self.0.borrow() == *other.0.borrow()
    }
}
