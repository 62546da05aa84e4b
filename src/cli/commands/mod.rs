//! Command implementations
//!
//! Each command follows the same shape: resolve the ledger location, load
//! inputs, run the pure service logic, render, and (for mutations) save.

mod accept;
mod prune;
mod report;

pub use accept::{accept_all, accept_rule};
pub use prune::prune;
pub use report::report;

use quell::config::ProjectConfig;
use quell::paths::{self, LedgerPath};

/// Resolve the ledger location: CLI flag wins, then `.quell.toml`, then
/// the default file in the project root.
fn resolve_ledger(cli_override: Option<&str>) -> LedgerPath {
    let root = paths::project_root();
    let config = ProjectConfig::load(&root);
    let explicit = cli_override
        .map(str::to_string)
        .or_else(|| config.suppressions.ledger_location.clone());
    paths::resolve_ledger_path(explicit.as_deref(), &root)
}
