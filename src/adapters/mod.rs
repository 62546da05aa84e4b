//! Adapters binding the core ports to concrete inputs

pub mod json_batch;
