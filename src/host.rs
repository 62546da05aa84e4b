//! Integration facade for embedding hosts
//!
//! A [`Host`] wires an external [`AnalysisEngine`] to the ledger store and
//! the reconciliation service: resolve path, load ledger (once, memoized),
//! reconcile, and persist mutations. Analysis calls are read-only with
//! respect to the ledger; only the mutation helpers (and the CLI built on
//! them) write.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::core::models::{Ledger, ResultBatch};
use crate::core::ports::{AnalysisEngine, ResultCache};
use crate::core::services::{mutations, reconciler};
use crate::paths::{self, LedgerPath};
use crate::storage;

/// Constructor options for a [`Host`]
#[derive(Debug, Clone)]
pub struct HostOptions {
    /// Project root; ledger paths and file keys are relative to it
    pub root: PathBuf,

    /// Explicit ledger path (absolute, or relative to `root`).
    /// Omitted means the default location inside `root`.
    pub ledger_location: Option<String>,

    /// Whether analysis results are reconciled before being returned.
    /// Defaults to `false` for backward compatibility; a future major
    /// version may flip this, so callers should treat it as configurable
    /// rather than relying on either default.
    pub apply_suppressions: bool,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            root: paths::project_root(),
            ledger_location: None,
            apply_suppressions: false,
        }
    }
}

/// Embedding-host facade over an analysis engine and the suppression ledger
pub struct Host<E> {
    engine: E,
    ledger_path: LedgerPath,
    apply_suppressions: bool,
    result_cache: Option<Box<dyn ResultCache>>,
    // Instance-scoped memoization: loaded at most once per host, and only
    // a successful load is cached.
    ledger: Mutex<Option<Ledger>>,
}

impl<E> std::fmt::Debug for Host<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("ledger_path", &self.ledger_path)
            .field("apply_suppressions", &self.apply_suppressions)
            .finish_non_exhaustive()
    }
}

impl<E: AnalysisEngine> Host<E> {
    /// Create a host around an analysis engine
    #[must_use]
    pub fn new(engine: E, options: &HostOptions) -> Self {
        let ledger_path =
            paths::resolve_ledger_path(options.ledger_location.as_deref(), &options.root);
        Self {
            engine,
            ledger_path,
            apply_suppressions: options.apply_suppressions,
            result_cache: None,
            ledger: Mutex::new(None),
        }
    }

    /// Attach a raw-result cache.
    ///
    /// Raw batches are committed to it before reconciliation, so editing
    /// the ledger never invalidates cached analysis results.
    #[must_use]
    pub fn with_result_cache(mut self, cache: Box<dyn ResultCache>) -> Self {
        self.result_cache = Some(cache);
        self
    }

    /// The resolved ledger location this host reads and writes
    #[must_use]
    pub const fn ledger_path(&self) -> &LedgerPath {
        &self.ledger_path
    }

    /// The current ledger, loaded lazily and memoized per host instance.
    ///
    /// A failed load aborts only the calling operation; a ledger cached by
    /// an earlier successful load is unaffected.
    pub fn ledger(&self) -> Result<Ledger, storage::LedgerError> {
        let mut cached = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(ledger) = cached.as_ref() {
            return Ok(ledger.clone());
        }
        let loaded = storage::load(&self.ledger_path)?;
        *cached = Some(loaded.clone());
        Ok(loaded)
    }

    /// Analyze the files matched by `patterns`
    pub fn analyze_files(&self, patterns: &[String]) -> anyhow::Result<ResultBatch> {
        let raw = self.engine.analyze_files(patterns)?;
        self.finish(raw)
    }

    /// Analyze a text snippet as if it lived at `path_hint`
    pub fn analyze_text(&self, text: &str, path_hint: Option<&str>) -> anyhow::Result<ResultBatch> {
        let raw = self.engine.analyze_text(text, path_hint)?;
        self.finish(raw)
    }

    // Ordering matters here: the raw batch goes to the cache first, then
    // reconciliation runs on a copy the cache never sees.
    fn finish(&self, raw: ResultBatch) -> anyhow::Result<ResultBatch> {
        if let Some(cache) = &self.result_cache {
            cache.commit(&raw)?;
        }
        if !self.apply_suppressions {
            return Ok(raw);
        }
        let ledger = self.ledger()?;
        Ok(reconciler::apply_suppressions(&raw, &ledger))
    }

    /// Accept every occurrence group in `batch`, persist, and return the
    /// new ledger
    pub fn accept_all(&self, batch: &ResultBatch) -> anyhow::Result<Ledger> {
        let next = mutations::accept_all(&self.ledger()?, batch);
        self.persist(next)
    }

    /// Accept occurrence groups for `rule_id`, persist, and return the
    /// new ledger
    pub fn accept_for_rule(&self, batch: &ResultBatch, rule_id: &str) -> anyhow::Result<Ledger> {
        let next = mutations::accept_for_rule(&self.ledger()?, batch, rule_id);
        self.persist(next)
    }

    /// Prune stale entries against a full-repository batch, persist, and
    /// return the new ledger
    pub fn prune(&self, batch: &ResultBatch) -> anyhow::Result<Ledger> {
        let next = mutations::prune(&self.ledger()?, batch)?;
        self.persist(next)
    }

    fn persist(&self, next: Ledger) -> anyhow::Result<Ledger> {
        storage::save(&self.ledger_path, &next)?;
        let mut cached = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        *cached = Some(next.clone());
        Ok(next)
    }
}
