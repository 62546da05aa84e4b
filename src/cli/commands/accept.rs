//! Accept commands - record current finding counts in the ledger

use quell::adapters::json_batch;
use quell::core::models::ResultBatch;
use quell::core::services::mutations;
use quell::output::{AcceptResult, OutputMode};
use quell::storage;

/// Accept every occurrence group in `results`
pub fn accept_all(
    results: &str,
    ledger_override: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    run_accept(results, ledger_override, None, mode)
}

/// Accept occurrence groups for a single rule
pub fn accept_rule(
    rule: &str,
    results: &str,
    ledger_override: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    run_accept(results, ledger_override, Some(rule), mode)
}

fn run_accept(
    results: &str,
    ledger_override: Option<&str>,
    rule: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let location = super::resolve_ledger(ledger_override);
    let ledger = storage::load(&location)?;
    let batch = json_batch::read_batch(results)?;

    let next = match rule {
        Some(rule) => mutations::accept_for_rule(&ledger, &batch, rule),
        None => mutations::accept_all(&ledger, &batch),
    };
    storage::save(&location, &next)?;

    let result = AcceptResult {
        rule: rule.map(ToString::to_string),
        groups_accepted: accepted_groups(&batch, rule),
        ledger_entries: next.len(),
        ledger_path: location.path.display().to_string(),
    };
    result.render(mode);
    Ok(())
}

/// Count the occurrence groups the acceptance touched
fn accepted_groups(batch: &ResultBatch, rule: Option<&str>) -> usize {
    batch
        .files
        .iter()
        .map(|file| {
            file.occurrence_counts()
                .keys()
                .filter(|&&group_rule| rule.is_none_or(|r| r == group_rule))
                .count()
        })
        .sum()
}
