//! Type definitions for parsed and merged `.env` content.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single `KEY=VALUE` declaration.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyValuePair {
    key: String,
    value: String,
}

impl KeyValuePair {
    /// Create a new pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into owned key and value.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl fmt::Debug for KeyValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyValuePair")
            .field(&self.key)
            .field(&self.value)
            .finish()
    }
}

impl fmt::Display for KeyValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// A parsed input file: its path and declarations in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    pairs: Vec<KeyValuePair>,
}

impl SourceFile {
    /// Create a source file from already parsed pairs.
    pub fn new(path: impl Into<PathBuf>, pairs: Vec<KeyValuePair>) -> Self {
        Self {
            path: path.into(),
            pairs,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the declarations.
    pub fn pairs(&self) -> &[KeyValuePair] {
        &self.pairs
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the file declares nothing.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Key to value mapping that iterates in first-insertion order.
///
/// Overwriting an existing key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl MergedMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

/// Builds a mapping where later declarations replace earlier values.
impl FromIterator<KeyValuePair> for MergedMapping {
    fn from_iter<I: IntoIterator<Item = KeyValuePair>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for pair in iter {
            let (key, value) = pair.into_parts();
            mapping.insert(key, value);
        }
        mapping
    }
}

/// A key re-declared with a different value by a later file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// The colliding key.
    pub key: String,
    /// Value held by the mapping when the collision happened.
    pub old_value: String,
    /// Value declared by the later file.
    pub new_value: String,
    /// File that carried the new value.
    pub source: PathBuf,
}
