//! # Query Pipeline
//!
//! Turns `(candidates, QueryConfig)` into the ordered result list:
//! 1. Free-text filter
//! 2. Structured filter (one stage per constrained dimension)
//! 3. Stable sort by the selected mode
//!
//! The output is a derived view. It borrows from the input collection and
//! is recomputed from scratch on every call, so it can never drift from
//! the configuration that produced it.

use std::time::Instant;

use candidate_store::Candidate;

use crate::filter_pipeline::FilterPipeline;
use crate::query::QueryConfig;
use crate::sort::sort_candidates;

/// Run the full query over a candidate collection.
///
/// # Arguments
/// * `candidates` - The base collection, in snapshot order
/// * `config` - The active search state
///
/// # Returns
/// References into `candidates`, filtered and sorted
pub fn run<'a>(candidates: &'a [Candidate], config: &QueryConfig) -> Vec<&'a Candidate> {
    let start = Instant::now();

    let pipeline = FilterPipeline::from_config(config);
    let mut results = pipeline.apply(candidates.iter().collect());
    sort_candidates(&mut results, config.sort_mode);

    tracing::debug!(
        "Query ran over {} candidates: {} results ({} stages, sort={}) in {:.2?}",
        candidates.len(),
        results.len(),
        pipeline.len(),
        config.sort_mode,
        start.elapsed()
    );
    results
}
