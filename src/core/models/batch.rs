//! Analysis result batches
//!
//! A batch is the transient output of one analyzer run: an ordered list of
//! per-file results. Batches are never persisted in suppressed form; only
//! the raw batch may be handed to an external result cache, so ledger edits
//! never invalidate cached analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Message;

/// Analysis results for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    /// File path, normalized relative to the project root with `/` separators
    pub path: String,

    /// Visible findings, in analyzer order
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Findings silenced by reconciliation; kept so embedding hosts can
    /// still inspect or count them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<Message>,
}

impl FileResult {
    /// Create an empty result for a file
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            messages: Vec::new(),
            suppressed: Vec::new(),
        }
    }

    /// Count visible occurrences per rule id.
    ///
    /// Each entry is one occurrence group: the atomic unit suppression is
    /// decided on. Non-rule diagnostics are not counted.
    #[must_use]
    pub fn rule_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for message in &self.messages {
            if let Some(rule) = message.rule_id.as_deref() {
                *counts.entry(rule).or_default() += 1;
            }
        }
        counts
    }

    /// Count occurrences per rule id across visible AND suppressed
    /// findings.
    ///
    /// Acceptance and staleness reason about what the analyzer actually
    /// reported, so a batch that already went through reconciliation must
    /// count the same as the raw batch it came from.
    #[must_use]
    pub fn occurrence_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = self.rule_counts();
        for message in &self.suppressed {
            if let Some(rule) = message.rule_id.as_deref() {
                *counts.entry(rule).or_default() += 1;
            }
        }
        counts
    }

    /// Whether this file has no visible findings
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }
}

/// An ordered batch of per-file analysis results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBatch {
    /// Per-file results, in analyzer order
    pub files: Vec<FileResult>,
}

impl ResultBatch {
    /// Create an empty batch
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Look up the result for a file path
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&FileResult> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Total number of visible findings across all files
    #[must_use]
    pub fn total_messages(&self) -> usize {
        self.files.iter().map(|f| f.messages.len()).sum()
    }

    /// Total number of suppressed findings across all files
    #[must_use]
    pub fn total_suppressed(&self) -> usize {
        self.files.iter().map(|f| f.suppressed.len()).sum()
    }
}
