//! Ledger store - loads and persists the suppression ledger
//!
//! The ledger is a small, textual JSON file committed alongside the code.
//! Loads validate structure strictly: silently discarding a corrupt ledger
//! would erase accepted-suppression history without the user's consent, so
//! parse failures are fatal to the calling operation. Saves are
//! deterministic and serialized per ledger path so two in-flight writes
//! never interleave.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use thiserror::Error;

use crate::core::models::Ledger;
use crate::paths::LedgerPath;

/// Errors that can occur loading or saving the ledger
#[derive(Debug, Error)]
pub enum LedgerError {
    /// An explicitly requested ledger file does not exist. An explicit
    /// request signals intent, so silent fallback would hide
    /// misconfiguration; default-path absence is just an empty ledger.
    #[error("suppression ledger not found: {0}")]
    NotFound(PathBuf),

    /// The ledger file exists but is unparsable or structurally invalid
    #[error("suppression ledger at {path} is corrupt: {reason}")]
    Corrupt {
        /// Path of the offending file
        path: PathBuf,
        /// What failed to parse or validate
        reason: String,
    },

    /// Underlying filesystem error, propagated unmodified
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Load the ledger from its resolved location.
///
/// A missing file yields an empty ledger for the default location and
/// [`LedgerError::NotFound`] for an explicitly requested one.
pub fn load(location: &LedgerPath) -> Result<Ledger, LedgerError> {
    let content = match fs::read_to_string(&location.path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if location.explicit {
                return Err(LedgerError::NotFound(location.path.clone()));
            }
            log::debug!("no ledger at default location {}, starting empty", location.path.display());
            return Ok(Ledger::new());
        },
        Err(err) => return Err(LedgerError::Io(err)),
    };

    let ledger: Ledger = serde_json::from_str(&content).map_err(|err| LedgerError::Corrupt {
        path: location.path.clone(),
        reason: err.to_string(),
    })?;

    ledger.validate().map_err(|reason| LedgerError::Corrupt {
        path: location.path.clone(),
        reason,
    })?;

    log::debug!("loaded ledger with {} entries from {}", ledger.len(), location.path.display());
    Ok(ledger)
}

/// Save the ledger to its resolved location.
///
/// Output is pretty-printed JSON with keys in lexical order, so saving a
/// logically-unchanged ledger is byte-identical. One save at a time per
/// path; concurrent callers queue on a per-path lock.
pub fn save(location: &LedgerPath, ledger: &Ledger) -> Result<(), LedgerError> {
    let lock = save_lock(&location.path);
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(parent) = location.path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = serde_json::to_string_pretty(ledger).map_err(io::Error::from)?;
    content.push('\n');
    fs::write(&location.path, content)?;

    log::debug!("saved ledger with {} entries to {}", ledger.len(), location.path.display());
    Ok(())
}

/// Per-path save locks, so independent ledgers never contend while two
/// writers of the same file are serialized.
fn save_lock(path: &Path) -> Arc<Mutex<()>> {
    static LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();
    let locks = LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = locks.lock().unwrap_or_else(PoisonError::into_inner);
    map.entry(path.to_path_buf()).or_default().clone()
}
