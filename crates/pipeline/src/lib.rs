//! Query pipeline for the candidate Discover view.
//!
//! This crate provides:
//! - `QueryConfig` / `FilterSet`: the serializable search state
//! - Filter trait and implementations, composed by `FilterPipeline`
//! - The `matches` predicate over all seven filter dimensions
//! - Sort comparators and the end-to-end `run` function
//! - `PaginationWindow` for "load more"
//! - CSV export of a result list
//!
//! ## Architecture
//! The pipeline processes candidates in stages:
//! 1. Free-text filter (name, title, location, skills)
//! 2. Structured filters (one per constrained dimension)
//! 3. Stable sort by the selected mode
//! 4. The renderer sees a growable prefix of the result
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{query_pipeline, PaginationWindow, QueryConfig};
//!
//! let mut config = QueryConfig::default();
//! config.filters.toggle(Dimension::Skills, "React");
//!
//! let results = query_pipeline::run(store.all(), &config);
//! let window = PaginationWindow::default();
//! let visible = window.window(&results);
//! let csv = pipeline::export_csv(&results);
//! ```

pub mod export;
pub mod filter_pipeline;
pub mod filters;
pub mod pagination;
pub mod predicate;
pub mod query;
pub mod query_pipeline;
pub mod sort;
pub mod traits;

// Re-export main types
pub use export::{CSV_HEADER, export_csv, export_filename, write_csv};
pub use filter_pipeline::FilterPipeline;
pub use pagination::{DEFAULT_PAGE_SIZE, PaginationWindow};
pub use predicate::matches;
pub use query::{FilterSet, QueryConfig, SortMode, ViewMode};
pub use query_pipeline::run;
pub use sort::experience_years;
pub use traits::Filter;
