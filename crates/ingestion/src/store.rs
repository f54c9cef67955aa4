//! JSON persistence of sample records.
//!
//! Records are stored as a single-line JSON array of flat objects. Every
//! record is validated on the way in, so malformed values are rejected here
//! and never reach the calculation stages. Loading keeps duplicates as they
//! appear; which one wins is decided by [`merge`](crate::merger::merge).

use crate::merger::{dedup, DuplicatePolicy};
use catch_core::{Keyed, Result, SampleRecord};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Parse and validate a JSON array of samples, order and duplicates kept.
pub fn parse_records(json: &str) -> Result<Vec<SampleRecord>> {
    let records: Vec<SampleRecord> = serde_json::from_str(json)?;
    for record in &records {
        record.validate()?;
    }
    Ok(records)
}

/// Load samples from a JSON file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<SampleRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let records = parse_records(&raw)?;
    debug!(path = %path.display(), count = records.len(), "loaded sample records");
    Ok(records)
}

/// Serialize records to a single-line JSON array, deduplicated by key.
pub fn to_json<T: Keyed + Clone + Serialize>(records: &[T]) -> Result<String> {
    let unique = dedup(records, DuplicatePolicy::KeepLast);
    Ok(serde_json::to_string(&unique)?)
}

/// Write records to a JSON file, deduplicated by key.
pub fn save_records<T: Keyed + Clone + Serialize>(
    path: impl AsRef<Path>,
    records: &[T],
) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(records)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), "saved sample records");
    Ok(())
}
