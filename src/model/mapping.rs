//! Old-to-new label mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from stale header labels to their recomputed values.
///
/// Keys are the literal label strings found in the document (trailing dot
/// stripped, digits never normalized), so a stale "03" maps under "03",
/// not "3". Last write wins when two headers carried the same stale label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberMap {
    entries: BTreeMap<String, String>,
}

impl NumberMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `old` was renumbered to `new`.
    pub fn insert(&mut self, old: impl Into<String>, new: impl Into<String>) {
        self.entries.insert(old.into(), new.into());
    }

    /// Look up the replacement for a stale label.
    pub fn get(&self, old: &str) -> Option<&str> {
        self.entries.get(old).map(String::as_str)
    }

    /// Whether no label changed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of remapped labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over (old, new) pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(old, new)| (old.as_str(), new.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NumberMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = NumberMap::new();
        for (old, new) in iter {
            map.insert(old, new);
        }
        map
    }
}
