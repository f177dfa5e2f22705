//! # Persistence Adapter
//!
//! Syncs the live search state with a `KvStore` and restores it at startup.
//!
//! Five independent keys are used, one per persisted field:
//! `<prefix>.filters`, `<prefix>.query`, `<prefix>.sortMode`,
//! `<prefix>.viewMode` and `<prefix>.savedSearches`.
//!
//! Nothing here fails outward. A value that is missing or does not parse
//! falls back to its default; a write that fails is logged and dropped.

use pipeline::{FilterSet, QueryConfig, SortMode, ViewMode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::saved_search::SavedSearch;
use crate::storage::KvStore;

/// Fully qualified storage keys for one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub filters: String,
    pub query: String,
    pub sort_mode: String,
    pub view_mode: String,
    pub saved_searches: String,
}

impl StorageKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            filters: format!("{prefix}.filters"),
            query: format!("{prefix}.query"),
            sort_mode: format!("{prefix}.sortMode"),
            view_mode: format!("{prefix}.viewMode"),
            saved_searches: format!("{prefix}.savedSearches"),
        }
    }
}

/// Everything restored at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub config: QueryConfig,
    pub saved_searches: Vec<SavedSearch>,
}

pub struct PersistenceAdapter<S: KvStore> {
    store: S,
    keys: StorageKeys,
}

impl<S: KvStore> PersistenceAdapter<S> {
    /// Create an adapter over `store`, namespacing keys with `prefix`
    pub fn new(store: S, prefix: &str) -> Self {
        Self {
            store,
            keys: StorageKeys::with_prefix(prefix),
        }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Read and decode one key.
    ///
    /// Returns `None` when the key is absent or its value does not decode
    /// as `T`. A corrupt value is logged and otherwise ignored.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("Discarding corrupt persisted value for {}: {}", key, err);
                None
            }
        }
    }

    /// Encode and write one key. Failures are logged, never returned.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::warn!("Failed to encode {}: {}", key, err);
                return;
            }
        };
        if let Err(err) = self.store.set(key, encoded) {
            tracing::warn!("Failed to persist {}: {}", key, err);
        }
    }

    /// Restore all persisted fields, defaulting each one independently.
    pub fn hydrate(&self) -> PersistedState {
        let config = QueryConfig {
            query: self.load(&self.keys.query).unwrap_or_default(),
            filters: self.load(&self.keys.filters).unwrap_or_default(),
            sort_mode: self.load(&self.keys.sort_mode).unwrap_or_default(),
            view_mode: self.load(&self.keys.view_mode).unwrap_or_default(),
        };
        let saved_searches: Vec<SavedSearch> =
            self.load(&self.keys.saved_searches).unwrap_or_default();

        tracing::info!(
            "Hydrated search state: {} active filter(s), sort={}, view={}, {} saved search(es)",
            config.filters.active_count(),
            config.sort_mode,
            config.view_mode,
            saved_searches.len()
        );
        PersistedState {
            config,
            saved_searches,
        }
    }

    pub fn save_filters(&mut self, filters: &FilterSet) {
        let key = self.keys.filters.clone();
        self.save(&key, filters);
    }

    pub fn save_query(&mut self, query: &str) {
        let key = self.keys.query.clone();
        self.save(&key, query);
    }

    pub fn save_sort_mode(&mut self, mode: SortMode) {
        let key = self.keys.sort_mode.clone();
        self.save(&key, &mode);
    }

    pub fn save_view_mode(&mut self, mode: ViewMode) {
        let key = self.keys.view_mode.clone();
        self.save(&key, &mode);
    }

    pub fn save_saved_searches(&mut self, searches: &[SavedSearch]) {
        let key = self.keys.saved_searches.clone();
        self.save(&key, searches);
    }

    /// Persist every field of a query configuration
    pub fn save_config(&mut self, config: &QueryConfig) {
        self.save_query(&config.query);
        self.save_filters(&config.filters);
        self.save_sort_mode(config.sort_mode);
        self.save_view_mode(config.view_mode);
    }
}
