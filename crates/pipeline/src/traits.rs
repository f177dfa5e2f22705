//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use candidate_store::Candidate;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters never mutate candidates; they only decide which borrowed
///   records survive
/// - Filters are total: there is no error path, every input has an answer
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single candidate survives this filter
    fn keep(&self, candidate: &Candidate) -> bool;

    /// Apply this filter to a set of candidates, preserving their order.
    fn apply<'a>(&self, mut candidates: Vec<&'a Candidate>) -> Vec<&'a Candidate> {
        candidates.retain(|candidate| self.keep(candidate));
        candidates
    }
}
