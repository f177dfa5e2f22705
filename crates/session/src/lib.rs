//! # Session Crate
//!
//! Stateful side of the Discover view: everything that outlives a single
//! query run.
//!
//! ## Components
//!
//! - **storage**: `KvStore` seam with memory and file backends
//! - **persistence**: Five-key sync of the query state, with silent
//!   fallback to defaults on corrupt or missing values
//! - **saved_search**: Named, immutable snapshots of a `QueryConfig`
//! - **debounce**: Quiet-period commits of raw text input on tokio timers
//! - **discover**: `DiscoverSession`, which applies rendering intents and
//!   derives the visible page
//!
//! ## Example Usage
//!
//! ```ignore
//! use session::{DiscoverSession, DiscoverSettings, FileKvStore};
//!
//! let kv = FileKvStore::new(state_dir);
//! let mut session = DiscoverSession::new(store, kv, DiscoverSettings::default());
//!
//! session.toggle_filter_value(Dimension::Skills, "React");
//! let saved = session.save_search("Remote React");
//! let frame = session.frame();
//! ```

pub mod debounce;
pub mod discover;
pub mod error;
pub mod persistence;
pub mod saved_search;
pub mod settings;
pub mod storage;

// Re-export commonly used types
pub use debounce::Debouncer;
pub use discover::{DiscoverSession, RenderFrame};
pub use error::{Result, StorageError};
pub use persistence::{PersistedState, PersistenceAdapter, StorageKeys};
pub use saved_search::{SavedSearch, SavedSearchManager};
pub use settings::DiscoverSettings;
pub use storage::{FileKvStore, KvStore, MemoryKvStore};
