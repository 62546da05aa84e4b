//! Analysis engine port
//!
//! Defines the interface to the external analyzer that produces raw
//! result batches. quell never computes findings itself.

use crate::core::models::ResultBatch;

/// The external analyzer quell filters results for
pub trait AnalysisEngine: Send + Sync {
    /// Analyze the files matched by `patterns` and return the raw batch
    fn analyze_files(&self, patterns: &[String]) -> anyhow::Result<ResultBatch>;

    /// Analyze a text snippet; `path_hint` names the file the text would
    /// live at, so ledger entries can match it
    fn analyze_text(&self, text: &str, path_hint: Option<&str>) -> anyhow::Result<ResultBatch>;
}
