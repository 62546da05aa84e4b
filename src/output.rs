//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a report operation
#[derive(Debug, Serialize)]
pub struct ReportResult {
    /// Whether no visible findings remain after reconciliation
    pub clean: bool,
    /// Number of files in the batch
    pub files_checked: usize,
    /// Findings still visible after reconciliation
    pub visible: Vec<MessageLine>,
    /// Number of findings silenced by the ledger
    pub suppressed_count: usize,
}

/// A single finding, flattened for display
#[derive(Debug, Serialize)]
pub struct MessageLine {
    /// File the finding was reported in
    pub file: String,
    /// Rule id, if any
    pub rule: Option<String>,
    /// Severity level
    pub severity: String,
    /// Line (1-indexed)
    pub line: u32,
    /// Column (1-indexed)
    pub column: u32,
    /// Finding text
    pub text: String,
}

/// Result of an accept operation
#[derive(Debug, Serialize)]
pub struct AcceptResult {
    /// Rule the acceptance was restricted to, if any
    pub rule: Option<String>,
    /// Number of occurrence groups accepted
    pub groups_accepted: usize,
    /// Total entries in the ledger after the operation
    pub ledger_entries: usize,
    /// Where the ledger was written
    pub ledger_path: String,
}

/// Result of a prune operation (or its dry-run preview)
#[derive(Debug, Serialize)]
pub struct PruneResult {
    /// Stale entries removed (or that would be removed)
    pub removed: Vec<StaleEntryLine>,
    /// Whether this was a preview only
    pub dry_run: bool,
    /// Ledger location
    pub ledger_path: String,
}

/// A stale ledger entry, flattened for display
#[derive(Debug, Serialize)]
pub struct StaleEntryLine {
    /// File the entry references
    pub file: String,
    /// Rule the entry references
    pub rule: String,
}

fn colorize_severity(severity: &str) -> String {
    match severity {
        "error" => severity.red().to_string(),
        "warn" => severity.yellow().to_string(),
        _ => severity.blue().to_string(),
    }
}

impl ReportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.files_checked == 0 {
            println!("No files analyzed.");
            return;
        }

        println!("Checked {} file(s).\n", self.files_checked);

        for m in &self.visible {
            let rule = m.rule.as_deref().unwrap_or("(no rule)");
            println!(
                "  {}:{}:{}  [{}] {}",
                m.file,
                m.line,
                m.column,
                colorize_severity(&m.severity),
                rule
            );
            println!("          {}\n", m.text);
        }

        if self.suppressed_count > 0 {
            println!("{} finding(s) suppressed by the ledger.", self.suppressed_count);
        }

        if self.clean {
            println!("No visible findings.");
        } else {
            println!("{} visible finding(s).", self.visible.len());
        }
    }
}

impl AcceptResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        match &self.rule {
            Some(rule) => {
                println!("Accepted {} occurrence group(s) for rule '{rule}'.", self.groups_accepted);
            },
            None => println!("Accepted {} occurrence group(s).", self.groups_accepted),
        }
        println!("Ledger now has {} entr(ies): {}", self.ledger_entries, self.ledger_path);
    }
}

impl PruneResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.removed.is_empty() {
            println!("No stale entries.");
            return;
        }

        let verb = if self.dry_run { "Would remove" } else { "Removed" };
        println!("{verb} {} stale entr(ies):", self.removed.len());
        for entry in &self.removed {
            println!("  {}  {}", entry.file, entry.rule);
        }
        if !self.dry_run {
            println!("Ledger updated: {}", self.ledger_path);
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
