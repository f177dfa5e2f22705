//! Synchronous key-value storage for persisted UI state.
//!
//! Values are opaque strings (JSON, in practice); interpreting them is the
//! persistence adapter's job. Two backends are provided: an in-memory map
//! for tests and a directory of `<key>.json` files for the command line.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Durable, synchronous key-value store scoped to one user profile.
pub trait KvStore: Send {
    /// Stored value for `key`, or `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Remove a key. Returns whether anything was removed.
    fn remove(&mut self, key: &str) -> Result<bool>;
}

// --- Memory Implementation ---

#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    data: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.data.remove(key).is_some())
    }
}

// --- File Implementation ---

/// One file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn build_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.build_path(key).ok()?;
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!("Failed to read {}: {}", path.display(), err);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let path = self.build_path(key)?;
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.root).map_err(io_err)?;
        fs::write(&path, value).map_err(io_err)
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let path = self.build_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
