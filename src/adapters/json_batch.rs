//! JSON batch adapter
//!
//! The CLI does not run an analyzer itself; it consumes batches the
//! external analyzer emitted as JSON, from a file or stdin. File paths in
//! the batch are expected relative to the project root; separators are
//! normalized on ingest so ledgers written on Windows match elsewhere.

use std::fs;
use std::io::Read;

use anyhow::Context;

use crate::core::models::ResultBatch;
use crate::paths::normalize_separators;

/// Read a result batch from `source`: a file path, or `-` for stdin
pub fn read_batch(source: &str) -> anyhow::Result<ResultBatch> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading analysis results from stdin")?;
        buf
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("reading analysis results from {source}"))?
    };

    let mut batch: ResultBatch = serde_json::from_str(&content)
        .with_context(|| format!("parsing analysis results from {source}"))?;

    for file in &mut batch.files {
        file.path = normalize_separators(&file.path);
    }

    Ok(batch)
}
