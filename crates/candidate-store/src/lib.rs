//! # Candidate Store Crate
//!
//! This crate owns the talent pool that the Discover view searches over.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Candidate, Dimension, CandidateStore)
//! - **parser**: Parse JSON snapshots into Rust structs
//! - **index**: Build the store, validate ids, list facet values
//! - **error**: Error types for snapshot loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use candidate_store::{CandidateStore, Dimension};
//! use std::path::Path;
//!
//! let mut store = CandidateStore::load_from_file(Path::new("data/candidates.json"))?;
//!
//! let skills = store.facets(Dimension::Skills);
//! store.toggle_bookmark("c-1");
//! ```
//!
//! The collection is fixed once loaded. The bookmark flag is the only
//! field that changes afterwards.

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{Result, StoreLoadError, UnknownDimension};
pub use types::{
    // Type aliases
    CandidateId,
    // Core types
    Candidate,
    CandidateStore,
    Dimension,
    FacetValue,
};
