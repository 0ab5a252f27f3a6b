//! Append-only vocabulary/class registry.
use std::collections::HashMap;

/// Interns strings and assigns ids in insertion order.
///
/// Ids never change once assigned, which makes id assignment deterministic
/// across runs over the same input and lets a validation split extend a
/// training split's registry without invalidating it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    ids: HashMap<String, usize>,
    entries: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `entry`, appending it first if unseen.
    pub fn intern(&mut self, entry: &str) -> usize {
        if let Some(id) = self.ids.get(entry) {
            return *id;
        }
        let id = self.entries.len();
        self.entries.push(entry.to_string());
        self.ids.insert(entry.to_string(), id);
        id
    }

    /// Id of `entry` if already interned.
    pub fn get(&self, entry: &str) -> Option<usize> {
        self.ids.get(entry).copied()
    }

    /// Entry behind `id`.
    pub fn resolve(&self, id: usize) -> Option<&str> {
        self.entries.get(id).map(|s| s.as_str())
    }

    /// All entries, in id order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
