//! # Discover Session
//!
//! Coordinates the Discover view's state on behalf of the rendering layer:
//! 1. Hydrate the persisted query state at startup
//! 2. Apply user intents (text, filters, sort, view, bookmarks, saved searches)
//! 3. Persist each changed field synchronously
//! 4. Reset the pagination window whenever the query changes
//! 5. Derive the result list and the visible page on demand
//!
//! Results are never stored: every read re-runs the query pipeline over
//! the candidate store, so they always reflect the current configuration.

use candidate_store::{Candidate, CandidateStore, Dimension, FacetValue};
use pipeline::{PaginationWindow, QueryConfig, SortMode, ViewMode};
use uuid::Uuid;

use crate::persistence::PersistenceAdapter;
use crate::saved_search::{SavedSearch, SavedSearchManager};
use crate::settings::DiscoverSettings;
use crate::storage::KvStore;

/// Everything the renderer needs for one frame
#[derive(Debug)]
pub struct RenderFrame<'a> {
    pub visible: Vec<&'a Candidate>,
    pub config: &'a QueryConfig,
    pub active_filter_count: usize,
    pub total_results: usize,
    pub has_more: bool,
}

pub struct DiscoverSession<S: KvStore> {
    store: CandidateStore,
    config: QueryConfig,
    persistence: PersistenceAdapter<S>,
    saved: SavedSearchManager,
    pagination: PaginationWindow,
    settings: DiscoverSettings,
}

impl<S: KvStore> DiscoverSession<S> {
    /// Create a session over `store`, restoring persisted state from `kv`.
    ///
    /// # Arguments
    /// * `store` - The loaded candidate collection
    /// * `kv` - Durable storage for the query state
    /// * `settings` - Page size, saved-search cap, key prefix
    pub fn new(store: CandidateStore, kv: S, settings: DiscoverSettings) -> Self {
        let persistence = PersistenceAdapter::new(kv, &settings.key_prefix);
        let state = persistence.hydrate();
        let saved = SavedSearchManager::from_saved(state.saved_searches, settings.saved_search_cap);

        tracing::info!(
            "Discover session ready: {} candidates, {} saved search(es)",
            store.len(),
            saved.len()
        );
        Self {
            store,
            config: state.config,
            persistence,
            saved,
            pagination: PaginationWindow::new(settings.page_size),
            settings,
        }
    }

    // Accessors

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    pub fn settings(&self) -> &DiscoverSettings {
        &self.settings
    }

    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    pub fn saved_searches(&self) -> &[SavedSearch] {
        self.saved.list()
    }

    pub fn find_saved_search(&self, name: &str) -> Option<&SavedSearch> {
        self.saved.find_by_name(name)
    }

    pub fn visible_count(&self) -> usize {
        self.pagination.visible_count()
    }

    pub fn active_filter_count(&self) -> usize {
        self.config.filters.active_count()
    }

    /// Selectable values for a dimension
    pub fn facets(&self, dimension: Dimension) -> Vec<FacetValue> {
        self.store.facets(dimension)
    }

    // Derived views

    /// The full ordered result list for the current configuration
    pub fn results(&self) -> Vec<&Candidate> {
        pipeline::run(self.store.all(), &self.config)
    }

    /// The visible page of the result list
    pub fn visible_candidates(&self) -> Vec<&Candidate> {
        let results = self.results();
        self.pagination.window(&results).to_vec()
    }

    pub fn frame(&self) -> RenderFrame<'_> {
        let results = self.results();
        let total_results = results.len();
        RenderFrame {
            visible: self.pagination.window(&results).to_vec(),
            config: &self.config,
            active_filter_count: self.active_filter_count(),
            total_results,
            has_more: self.pagination.has_more(total_results),
        }
    }

    // Intents

    /// Commit free text to the query (the debounced value, not raw keystrokes)
    pub fn set_free_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.config.query {
            return;
        }
        tracing::debug!("Query committed: {:?}", text);
        self.config.query = text;
        self.persistence.save_query(&self.config.query);
        self.query_changed();
    }

    /// Select or deselect one value of a dimension.
    ///
    /// Returns `true` when the value is selected afterwards.
    pub fn toggle_filter_value(&mut self, dimension: Dimension, value: impl Into<String>) -> bool {
        let selected = self.config.filters.toggle(dimension, value);
        self.persistence.save_filters(&self.config.filters);
        self.query_changed();
        selected
    }

    pub fn clear_all_filters(&mut self) {
        if self.config.filters.is_empty() {
            return;
        }
        self.config.filters.clear();
        self.persistence.save_filters(&self.config.filters);
        self.query_changed();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        if mode == self.config.sort_mode {
            return;
        }
        self.config.sort_mode = mode;
        self.persistence.save_sort_mode(mode);
        self.query_changed();
    }

    /// Layout only: persisted, but the result list and page are untouched
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == self.config.view_mode {
            return;
        }
        self.config.view_mode = mode;
        self.persistence.save_view_mode(mode);
    }

    /// Returns the new bookmark state, or `None` for an unknown id
    pub fn toggle_bookmark(&mut self, candidate_id: &str) -> Option<bool> {
        self.store.toggle_bookmark(candidate_id)
    }

    /// Expose one more page. Returns the new visible count.
    pub fn load_more(&mut self) -> usize {
        let total = self.results().len();
        self.pagination.load_more(total)
    }

    /// Snapshot the live configuration under `name`.
    ///
    /// Blank names are ignored and return `None`.
    pub fn save_search(&mut self, name: &str) -> Option<SavedSearch> {
        let saved = self.saved.save(name, &self.config)?;
        self.persistence.save_saved_searches(self.saved.list());
        tracing::info!("Saved search {:?} ({})", saved.name, saved.id);
        Some(saved)
    }

    /// Replace the live configuration with a saved one.
    ///
    /// Returns `false` (and changes nothing) if the id is unknown.
    pub fn apply_saved_search(&mut self, id: Uuid) -> bool {
        let Some(config) = self.saved.apply(id) else {
            tracing::debug!("Saved search {} not found", id);
            return false;
        };
        self.config = config;
        self.persistence.save_config(&self.config);
        self.query_changed();
        tracing::info!("Applied saved search {}", id);
        true
    }

    /// Remove a saved search. Unknown ids are a no-op.
    pub fn delete_saved_search(&mut self, id: Uuid) -> bool {
        let removed = self.saved.delete(id);
        if removed {
            self.persistence.save_saved_searches(self.saved.list());
        }
        removed
    }

    /// CSV of the full current result list (not just the visible page)
    pub fn export_csv(&self) -> Vec<u8> {
        pipeline::export_csv(&self.results())
    }

    fn query_changed(&mut self) {
        self.pagination.reset();
    }
}
