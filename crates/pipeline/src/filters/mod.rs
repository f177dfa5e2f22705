//! Filter implementations for the query pipeline.
//!
//! This module contains the concrete filters that a QueryConfig is
//! compiled into before they are composed into a FilterPipeline.

pub mod dimension;
pub mod text_query;

// Re-export for convenience
pub use dimension::DimensionFilter;
pub use text_query::TextQueryFilter;
