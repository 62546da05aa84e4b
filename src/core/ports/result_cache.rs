//! Result cache port
//!
//! An embedding host may cache raw analysis results keyed by file content.
//! The host commits raw batches here BEFORE reconciliation, so editing the
//! ledger never invalidates cached results.

use crate::core::models::ResultBatch;

/// Cache for raw (pre-suppression) analysis results
pub trait ResultCache: Send + Sync {
    /// Commit a raw batch to the cache
    fn commit(&self, batch: &ResultBatch) -> anyhow::Result<()>;
}
