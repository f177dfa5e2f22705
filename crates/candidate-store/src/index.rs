//! CandidateStore construction and facet listing.
//!
//! Building the store validates id uniqueness and records each
//! candidate's position for O(1) lookups by id.

use crate::error::{Result, StoreLoadError};
use crate::parser;
use crate::types::*;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

impl CandidateStore {
    /// Build a store from an already-loaded collection.
    ///
    /// Fails if two candidates share an id.
    pub fn from_candidates(candidates: Vec<Candidate>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(candidates.len());
        for (pos, candidate) in candidates.iter().enumerate() {
            if positions.insert(candidate.id.clone(), pos).is_some() {
                return Err(StoreLoadError::DuplicateId {
                    id: candidate.id.clone(),
                });
            }
        }

        tracing::info!("Candidate store built with {} candidates", candidates.len());
        Ok(Self {
            candidates,
            positions,
        })
    }

    /// Load a snapshot file and build the store from it
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let candidates = parser::read_snapshot_file(path)?;
        Self::from_candidates(candidates)
    }

    /// Distinct values of a dimension with candidate counts.
    ///
    /// Values are ordered by ordinal string comparison. A candidate that
    /// lists the same value twice is counted once.
    pub fn facets(&self, dimension: Dimension) -> Vec<FacetValue> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for candidate in &self.candidates {
            let mut values: Vec<&str> = candidate
                .dimension_values(dimension)
                .iter()
                .map(String::as_str)
                .filter(|v| !v.is_empty())
                .collect();
            values.sort_unstable();
            values.dedup();
            for value in values {
                *counts.entry(value).or_insert(0) += 1;
            }
        }

        counts
            .into_iter()
            .map(|(value, count)| FacetValue {
                value: value.to_string(),
                count,
            })
            .collect()
    }
}
