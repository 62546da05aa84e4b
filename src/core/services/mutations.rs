//! Ledger mutation operations
//!
//! Builder/updater operations the CLI layer invokes to create or modify
//! ledger entries. All three are pure: they take the current ledger by
//! reference and return a new one, so a caller can compute a candidate
//! ledger, inspect a diff, and decide whether to persist it.

use thiserror::Error;

use super::reconciler::find_stale_entries;
use crate::core::models::{Ledger, ResultBatch};

/// Errors from mutation operations
#[derive(Debug, Error)]
pub enum MutationError {
    /// Pruning was invoked against a batch that does not cover every file
    /// the ledger references; pruning against it would delete entries for
    /// files simply not analyzed this run
    #[error(
        "batch does not cover {} file(s) referenced by the ledger: {}; \
         run against the full repository to prune",
        missing.len(),
        missing.join(", ")
    )]
    PartialAnalysis {
        /// Ledger-referenced files absent from the batch
        missing: Vec<String>,
    },
}

/// Accept every occurrence group in the batch.
///
/// Sets (or overwrites) each (file, rule) entry to the current occurrence
/// count. Pairs present in the ledger but absent from the batch are left
/// untouched: acceptance is additive, never implicitly destructive.
#[must_use]
pub fn accept_all(ledger: &Ledger, batch: &ResultBatch) -> Ledger {
    accept_matching(ledger, batch, |_| true)
}

/// Accept occurrence groups for a single rule.
#[must_use]
pub fn accept_for_rule(ledger: &Ledger, batch: &ResultBatch, rule_id: &str) -> Ledger {
    accept_matching(ledger, batch, |rule| rule == rule_id)
}

fn accept_matching(
    ledger: &Ledger,
    batch: &ResultBatch,
    matches: impl Fn(&str) -> bool,
) -> Ledger {
    let mut next = ledger.clone();
    for file in &batch.files {
        for (rule, count) in file.occurrence_counts() {
            if matches(rule) {
                next.set_count(&file.path, rule, u64::try_from(count).unwrap_or(u64::MAX));
            }
        }
    }
    next
}

/// Remove every stale entry from the ledger.
///
/// Requires a batch covering the full set of files the ledger references;
/// otherwise fails with [`MutationError::PartialAnalysis`] and leaves the
/// ledger unchanged. Re-running prune on its own output is a no-op.
pub fn prune(ledger: &Ledger, batch: &ResultBatch) -> Result<Ledger, MutationError> {
    let analyzed: std::collections::BTreeSet<&str> =
        batch.files.iter().map(|f| f.path.as_str()).collect();

    let missing: Vec<String> = ledger
        .files()
        .filter(|file| !analyzed.contains(file))
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(MutationError::PartialAnalysis { missing });
    }

    let mut next = ledger.clone();
    for (file, rule) in find_stale_entries(ledger, batch) {
        next.remove(&file, &rule);
    }
    Ok(next)
}
