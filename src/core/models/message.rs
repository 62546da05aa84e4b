//! Message model
//!
//! A message is a single finding the external analyzer reported at a
//! position in a file. Messages carrying a rule id can be suppressed via
//! the ledger; messages without one (parse errors and other non-rule
//! diagnostics) are always shown.

use serde::{Deserialize, Serialize};

use super::Severity;

/// A single analyzer finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Rule that produced this finding; `None` for non-rule diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    /// Severity as reported by the analyzer
    #[serde(default)]
    pub severity: Severity,

    /// Line the finding was reported at (1-indexed)
    pub line: u32,

    /// Column the finding was reported at (1-indexed)
    pub column: u32,

    /// Human-readable finding text
    pub text: String,
}

impl Message {
    /// Create a new rule finding
    #[must_use]
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        line: u32,
        column: u32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: Some(rule_id.into()),
            severity,
            line,
            column,
            text: text.into(),
        }
    }

    /// Create a non-rule diagnostic (e.g., a parse error)
    #[must_use]
    pub fn diagnostic(severity: Severity, line: u32, column: u32, text: impl Into<String>) -> Self {
        Self {
            rule_id: None,
            severity,
            line,
            column,
            text: text.into(),
        }
    }

    /// Whether this message can ever be suppressed
    #[must_use]
    pub const fn suppressible(&self) -> bool {
        self.rule_id.is_some()
    }
}
