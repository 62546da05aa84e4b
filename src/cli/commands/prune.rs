//! Prune command - drop ledger entries with no current occurrences

use quell::adapters::json_batch;
use quell::core::services::{mutations, reconciler};
use quell::output::{OutputMode, PruneResult, StaleEntryLine};
use quell::storage;

/// Remove stale ledger entries, or preview them with `dry_run`.
///
/// The batch must cover every file the ledger references; a partial batch
/// aborts the operation with the ledger unchanged.
pub fn prune(
    results: &str,
    ledger_override: Option<&str>,
    dry_run: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let location = super::resolve_ledger(ledger_override);
    let ledger = storage::load(&location)?;
    let batch = json_batch::read_batch(results)?;

    let stale = reconciler::find_stale_entries(&ledger, &batch);

    if !dry_run {
        let next = mutations::prune(&ledger, &batch)?;
        storage::save(&location, &next)?;
    }

    let result = PruneResult {
        removed: stale
            .into_iter()
            .map(|(file, rule)| StaleEntryLine { file, rule })
            .collect(),
        dry_run,
        ledger_path: location.path.display().to_string(),
    };
    result.render(mode);
    Ok(())
}
