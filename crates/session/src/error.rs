//! Error types for the session crate.
//!
//! Only the storage backend can fail. The persistence adapter above it
//! logs and swallows these, so they never reach the rendering layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Key is empty or would escape the storage root
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Backend I/O failed
    #[error("Storage I/O error for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StorageError>;
