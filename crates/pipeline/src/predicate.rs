//! Structured filter predicate.
//!
//! A candidate matches a `FilterSet` when, for every dimension, either the
//! dimension's accepted set is empty or it shares at least one value with
//! the candidate's attribute(s). Comparison is exact string equality.

use crate::query::FilterSet;
use candidate_store::{Candidate, Dimension};
use std::collections::BTreeSet;

/// Does the candidate satisfy one dimension's accepted set?
pub fn dimension_matches(candidate: &Candidate, dimension: Dimension, accepted: &BTreeSet<String>) -> bool {
    accepted.is_empty()
        || candidate
            .dimension_values(dimension)
            .iter()
            .any(|value| accepted.contains(value))
}

/// Does the candidate satisfy every non-empty dimension of the filter set?
pub fn matches(candidate: &Candidate, filters: &FilterSet) -> bool {
    Dimension::ALL
        .iter()
        .all(|&dimension| dimension_matches(candidate, dimension, filters.values(dimension)))
}
