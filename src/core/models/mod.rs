//! Domain models for analysis results and the suppression ledger

mod batch;
mod ledger;
mod message;
mod severity;

pub use batch::{FileResult, ResultBatch};
pub use ledger::{Ledger, SuppressionEntry};
pub use message::Message;
pub use severity::Severity;
