//! Centralized path definitions for quell
//!
//! This module provides a single source of truth for the filenames quell
//! reads and writes, and for the ledger path resolution policy.
//!
//! ## Storage Layout
//!
//! ```text
//! repo/                              # Project root
//! ├── .quell.toml                    # Committed config (host option defaults)
//! └── .quell-suppressions.json       # Committed suppression ledger
//! ```
//!
//! The ledger lives at a fixed default location inside the project root
//! unless the embedding host (or the CLI) asks for an explicit path. The
//! distinction matters: a missing default ledger means "nothing accepted
//! yet", while a missing explicit ledger means misconfiguration.

use std::path::{Path, PathBuf};

/// Suppression ledger filename (default location, inside the project root)
pub const LEDGER_FILE: &str = ".quell-suppressions.json";

/// Project configuration filename
pub const QUELL_TOML: &str = ".quell.toml";

/// A resolved ledger location.
///
/// Remembers whether the path was explicitly requested, because load
/// semantics differ: absence of the default file yields an empty ledger,
/// absence of an explicitly requested file is an error.
#[derive(Debug, Clone)]
pub struct LedgerPath {
    /// Resolved path to the ledger file
    pub path: PathBuf,
    /// Whether the caller asked for this path explicitly
    pub explicit: bool,
}

/// Get the project root directory.
#[must_use]
pub fn project_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Get path to the `.quell.toml` config file inside `root`.
#[must_use]
pub fn quell_toml(root: &Path) -> PathBuf {
    root.join(QUELL_TOML)
}

/// Resolve the ledger path.
///
/// An explicit absolute path is used verbatim; an explicit relative path is
/// resolved against `root`; no explicit path defaults to
/// [`LEDGER_FILE`] inside `root`.
#[must_use]
pub fn resolve_ledger_path(explicit: Option<&str>, root: &Path) -> LedgerPath {
    explicit.map_or_else(
        || LedgerPath {
            path: root.join(LEDGER_FILE),
            explicit: false,
        },
        |loc| {
            let requested = Path::new(loc);
            let path = if requested.is_absolute() {
                requested.to_path_buf()
            } else {
                root.join(requested)
            };
            LedgerPath {
                path,
                explicit: true,
            }
        },
    )
}

/// Normalize path separators to `/` so ledger keys are portable
/// across machines.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
