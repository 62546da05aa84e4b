//! Ports to external collaborators
//!
//! Rule evaluation and result caching live outside this crate. These traits
//! are the seams the host depends on; the CLI plugs in the JSON batch
//! adapter, tests plug in stubs.

mod analysis;
mod result_cache;

pub use analysis::AnalysisEngine;
pub use result_cache::ResultCache;
