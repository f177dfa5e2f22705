//! Error types for the candidate-store crate.
//!
//! Loading a snapshot is the only fallible operation here: once a
//! `CandidateStore` exists, every query against it is total.

use thiserror::Error;

/// Errors that can occur while loading a candidate snapshot.
///
/// The `#[derive(Error)]` macro from thiserror implements `Display`
/// from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum StoreLoadError {
    /// Snapshot file could not be found or opened
    #[error("Failed to open snapshot: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the snapshot
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Snapshot is not a JSON array of candidate records
    #[error("Parse error in snapshot: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Two records in the snapshot share an id
    #[error("Duplicate candidate id: {id}")]
    DuplicateId { id: String },
}

/// Returned when a string names no known filter dimension
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter dimension: {0}")]
pub struct UnknownDimension(pub String);

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreLoadError>;
