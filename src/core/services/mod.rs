//! Pure services over the domain model
//!
//! Reconciliation filters batches against the ledger; mutations build new
//! ledgers from batches. Neither performs I/O.

pub mod mutations;
pub mod reconciler;
