//! Named snapshots of the full query configuration.
//!
//! A saved search owns its own copy of the `QueryConfig` taken at creation
//! time, so later changes to the live configuration never leak into it.
//! Entries are never edited in place; saving again creates a new entry.

use chrono::{DateTime, Utc};
use pipeline::QueryConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::settings::DEFAULT_SAVED_SEARCH_CAP;

/// An immutable, named snapshot of a query configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub id: Uuid,
    pub name: String,
    pub config: QueryConfig,
    pub created_at: DateTime<Utc>,
}

/// Keeps saved searches newest first, bounded by a retention cap.
#[derive(Debug, Clone)]
pub struct SavedSearchManager {
    searches: Vec<SavedSearch>,
    capacity: usize,
}

impl SavedSearchManager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SAVED_SEARCH_CAP)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            searches: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Rebuild from a hydrated list (assumed newest first), enforcing the cap
    pub fn from_saved(mut searches: Vec<SavedSearch>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        searches.truncate(capacity);
        Self { searches, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.searches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.searches.is_empty()
    }

    /// Snapshot `current` under `name`.
    ///
    /// ## Algorithm
    /// 1. Blank (empty or whitespace-only) names are rejected: returns `None`
    /// 2. Clone the config, stamp a fresh id and creation time
    /// 3. Prepend, then drop the oldest entries beyond the cap
    pub fn save(&mut self, name: &str, current: &QueryConfig) -> Option<SavedSearch> {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("Ignoring saved search with blank name");
            return None;
        }

        let saved = SavedSearch {
            id: Uuid::new_v4(),
            name: name.to_string(),
            config: current.clone(),
            created_at: Utc::now(),
        };
        self.searches.insert(0, saved.clone());

        if self.searches.len() > self.capacity {
            let evicted = self.searches.len() - self.capacity;
            self.searches.truncate(self.capacity);
            tracing::debug!("Evicted {} oldest saved search(es)", evicted);
        }
        Some(saved)
    }

    /// Saved searches, most recently created first
    pub fn list(&self) -> &[SavedSearch] {
        &self.searches
    }

    pub fn get(&self, id: Uuid) -> Option<&SavedSearch> {
        self.searches.iter().find(|s| s.id == id)
    }

    /// Most recent saved search with this exact name
    pub fn find_by_name(&self, name: &str) -> Option<&SavedSearch> {
        let name = name.trim();
        self.searches.iter().find(|s| s.name == name)
    }

    /// A copy of the stored config, or `None` if the id is unknown
    pub fn apply(&self, id: Uuid) -> Option<QueryConfig> {
        self.get(id).map(|s| s.config.clone())
    }

    /// Remove an entry. Unknown ids are a no-op; returns whether one was removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.searches.len();
        self.searches.retain(|s| s.id != id);
        self.searches.len() != before
    }
}

impl Default for SavedSearchManager {
    fn default() -> Self {
        Self::new()
    }
}
