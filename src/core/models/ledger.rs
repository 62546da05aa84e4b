//! The suppression ledger
//!
//! Maps file path -> rule id -> accepted occurrence count. The ledger is
//! the only state quell persists. `BTreeMap` keys serialize in lexical
//! order, so repeated saves of a logically-unchanged ledger are
//! byte-identical and diff cleanly under version control.
//!
//! Invariant: a stored entry always has `count >= 1`. Zero-count entries
//! are meaningless (nothing to suppress) and are never written; pruning is
//! the only way entries disappear.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Accepted occurrence count for one (file, rule) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionEntry {
    /// Number of occurrences accepted at suppression time
    pub count: u64,
}

/// Persisted suppression state: file path -> rule id -> entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger(BTreeMap<String, BTreeMap<String, SuppressionEntry>>);

impl Ledger {
    /// Create an empty ledger
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Whether the ledger has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of (file, rule) entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    /// Accepted count for a (file, rule) pair, if any
    #[must_use]
    pub fn count_for(&self, file: &str, rule: &str) -> Option<u64> {
        self.0.get(file).and_then(|rules| rules.get(rule)).map(|e| e.count)
    }

    /// Set (or overwrite) the accepted count for a (file, rule) pair.
    ///
    /// A count of zero is not stored; it removes any existing entry
    /// instead, preserving the no-zero-count invariant.
    pub fn set_count(&mut self, file: &str, rule: &str, count: u64) {
        if count == 0 {
            self.remove(file, rule);
            return;
        }
        self.0
            .entry(file.to_string())
            .or_default()
            .insert(rule.to_string(), SuppressionEntry { count });
    }

    /// Remove the entry for a (file, rule) pair, dropping the file key
    /// when its last rule entry goes. Returns whether an entry existed.
    pub fn remove(&mut self, file: &str, rule: &str) -> bool {
        let Some(rules) = self.0.get_mut(file) else {
            return false;
        };
        let removed = rules.remove(rule).is_some();
        if rules.is_empty() {
            self.0.remove(file);
        }
        removed
    }

    /// Iterate over the file paths the ledger references
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over all (file, rule, count) entries in lexical order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.0.iter().flat_map(|(file, rules)| {
            rules.iter().map(move |(rule, entry)| (file.as_str(), rule.as_str(), entry.count))
        })
    }

    /// Check the structural invariant: every stored count is at least 1.
    ///
    /// Used by the store after parsing; a violation means the file was not
    /// produced by a well-formed writer.
    pub fn validate(&self) -> Result<(), String> {
        for (file, rule, count) in self.entries() {
            if count == 0 {
                return Err(format!("zero count for rule '{rule}' in '{file}'"));
            }
        }
        Ok(())
    }
}
