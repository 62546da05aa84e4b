//! Report command - reconcile a batch and show what remains visible

use quell::adapters::json_batch;
use quell::core::services::reconciler;
use quell::output::{MessageLine, OutputMode, ReportResult};
use quell::storage;

/// Reconcile `results` against the ledger and print the visible findings.
/// Exits non-zero when visible findings remain.
pub fn report(results: &str, ledger_override: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let location = super::resolve_ledger(ledger_override);
    let ledger = storage::load(&location)?;
    let batch = json_batch::read_batch(results)?;

    let filtered = reconciler::apply_suppressions(&batch, &ledger);

    let visible: Vec<MessageLine> = filtered
        .files
        .iter()
        .flat_map(|file| {
            file.messages.iter().map(|m| MessageLine {
                file: file.path.clone(),
                rule: m.rule_id.clone(),
                severity: m.severity.to_string(),
                line: m.line,
                column: m.column,
                text: m.text.clone(),
            })
        })
        .collect();

    let result = ReportResult {
        clean: visible.is_empty(),
        files_checked: filtered.files.len(),
        suppressed_count: filtered.total_suppressed(),
        visible,
    };
    result.render(mode);

    if !result.clean {
        std::process::exit(1);
    }
    Ok(())
}
