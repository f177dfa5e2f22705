//! Tunables for a Discover session.

use std::time::Duration;

use pipeline::DEFAULT_PAGE_SIZE;

/// Quiet period before typed text is committed to the query
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Saved searches kept before the oldest are evicted
pub const DEFAULT_SAVED_SEARCH_CAP: usize = 20;

/// Namespace for persisted keys
pub const DEFAULT_KEY_PREFIX: &str = "talent.discover";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverSettings {
    pub page_size: usize,
    pub debounce: Duration,
    pub saved_search_cap: usize,
    pub key_prefix: String,
}

impl Default for DiscoverSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
            saved_search_cap: DEFAULT_SAVED_SEARCH_CAP,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}
