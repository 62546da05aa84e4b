//! Reconciliation service - filters result batches against the ledger
//!
//! This is pure business logic with no I/O. Suppression is decided per
//! occurrence group (all messages in one file sharing one rule id), never
//! per individual message: the ledger records only a count, so there is no
//! per-message identity to match on.

use std::collections::BTreeSet;

use crate::core::models::{FileResult, Ledger, ResultBatch};

/// Filter a batch against the ledger.
///
/// For a (file, rule) group with `n` current occurrences and an accepted
/// count of `k`: all `n` are suppressed when `n <= k`, and NONE when
/// `n > k`. An increase for an already-accepted rule signals a new,
/// unreviewed violation, and partial suppression would let it hide among
/// the accepted ones at an arbitrary position, so the whole group is shown.
/// Pairs without a ledger entry are treated as `k == 0`.
///
/// Suppressed messages are moved to the file's `suppressed` list, not
/// dropped. Files left without visible messages stay in the batch; the
/// caller decides whether to omit clean files from its report.
#[must_use]
pub fn apply_suppressions(batch: &ResultBatch, ledger: &Ledger) -> ResultBatch {
    let files = batch
        .files
        .iter()
        .map(|file| {
            let counts = file.rule_counts();
            let mut result = FileResult::new(file.path.clone());
            result.suppressed = file.suppressed.clone();

            for message in &file.messages {
                let suppress = message.rule_id.as_deref().is_some_and(|rule| {
                    let current = counts.get(rule).copied().unwrap_or(0);
                    let accepted = ledger.count_for(&file.path, rule).unwrap_or(0);
                    u64::try_from(current).unwrap_or(u64::MAX) <= accepted
                });

                if suppress {
                    result.suppressed.push(message.clone());
                } else {
                    result.messages.push(message.clone());
                }
            }

            result
        })
        .collect();

    ResultBatch { files }
}

/// Find ledger entries with zero occurrences across the entire batch.
///
/// Read-only, so it can back a dry-run preview as well as pruning. Both
/// visible and already-suppressed occurrences count as live; only the
/// caller knows whether the batch covers the full repository.
#[must_use]
pub fn find_stale_entries(ledger: &Ledger, batch: &ResultBatch) -> BTreeSet<(String, String)> {
    let live: std::collections::BTreeMap<&str, _> =
        batch.files.iter().map(|file| (file.path.as_str(), file.occurrence_counts())).collect();

    ledger
        .entries()
        .filter(|(file, rule, _)| {
            live.get(file).and_then(|counts| counts.get(rule)).copied().unwrap_or(0) == 0
        })
        .map(|(file, rule, _)| (file.to_string(), rule.to_string()))
        .collect()
}
