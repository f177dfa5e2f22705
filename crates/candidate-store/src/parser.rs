//! Parser for candidate snapshot files.
//!
//! A snapshot is a JSON array of candidate records (camelCase keys):
//!
//! ```json
//! [{ "id": "c-1", "name": "Alice", "title": "Frontend Engineer", ... }]
//! ```
//!
//! Unknown keys are ignored so a richer upstream export still loads.

use crate::error::{Result, StoreLoadError};
use crate::types::Candidate;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a snapshot from a JSON string
pub fn parse_snapshot(json: &str) -> Result<Vec<Candidate>> {
    let candidates: Vec<Candidate> = serde_json::from_str(json)?;
    Ok(candidates)
}

/// Read and parse a snapshot file
pub fn read_snapshot_file(path: &Path) -> Result<Vec<Candidate>> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => StoreLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => StoreLoadError::IoError(err),
    })?;
    parse_snapshot(&content)
}
