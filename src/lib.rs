//! quell - suppress accepted static-analysis findings across runs
//!
//! This library persists a ledger of accepted finding counts per (file, rule)
//! pair and filters fresh analysis results against it, so deliberately
//! accepted findings stay silent while new or regressed ones surface.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod host;
pub mod output;
pub mod paths;
pub mod storage;
