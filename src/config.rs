//! Project configuration
//!
//! `.quell.toml` at the project root supplies defaults for the host
//! options, so a team can commit "suppressions apply automatically" (or a
//! custom ledger location) next to the ledger itself.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::host::HostOptions;
use crate::paths;

/// Contents of `.quell.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Suppression behavior defaults
    #[serde(default)]
    pub suppressions: SuppressionConfig,
}

/// The `[suppressions]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuppressionConfig {
    /// Ledger path override (absolute, or relative to the project root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_location: Option<String>,

    /// Whether analysis results are reconciled automatically
    #[serde(default)]
    pub apply_suppressions: bool,
}

impl ProjectConfig {
    /// Load config from `<root>/.quell.toml`, or defaults if absent or
    /// unreadable
    #[must_use]
    pub fn load(root: &Path) -> Self {
        let path = paths::quell_toml(root);
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to `<root>/.quell.toml`
    pub fn save(&self, root: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(paths::quell_toml(root), content)?;
        Ok(())
    }

    /// Turn this config into host options rooted at `root`
    #[must_use]
    pub fn host_options(&self, root: &Path) -> HostOptions {
        HostOptions {
            root: root.to_path_buf(),
            ledger_location: self.suppressions.ledger_location.clone(),
            apply_suppressions: self.suppressions.apply_suppressions,
        }
    }
}
