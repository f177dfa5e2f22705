//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern, plus the translation from a
//! `FilterSet` / free-text query into such a chain.

use crate::filters::{DimensionFilter, TextQueryFilter};
use crate::query::QueryConfig;
use crate::traits::Filter;
use candidate_store::Candidate;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextQueryFilter::new("rem"))
///     .add_filter(DimensionFilter::new(Dimension::Skills, skills));
///
/// let filtered = pipeline.apply(store.all().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Compile a query configuration into a pipeline.
    ///
    /// The text filter runs first, then one filter per constrained
    /// dimension. Unconstrained dimensions and an empty query add no
    /// stage at all.
    pub fn from_config(config: &QueryConfig) -> Self {
        let mut pipeline = Self::new();

        let text = TextQueryFilter::new(&config.query);
        if !text.is_noop() {
            pipeline = pipeline.add_filter(text);
        }

        for dimension in config.filters.active_dimensions() {
            pipeline = pipeline.add_filter(DimensionFilter::new(
                dimension,
                config.filters.values(dimension).clone(),
            ));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of stages in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set (input order preserved)
    pub fn apply<'a>(&self, candidates: Vec<&'a Candidate>) -> Vec<&'a Candidate> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
