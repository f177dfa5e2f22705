//! Filter for a single structured dimension.

use crate::predicate::dimension_matches;
use crate::traits::Filter;
use candidate_store::{Candidate, Dimension};
use std::collections::BTreeSet;

/// Keeps candidates whose values for one dimension intersect the
/// accepted set. An empty accepted set keeps everything.
pub struct DimensionFilter {
    dimension: Dimension,
    accepted: BTreeSet<String>,
    name: String,
}

impl DimensionFilter {
    pub fn new(dimension: Dimension, accepted: BTreeSet<String>) -> Self {
        Self {
            dimension,
            accepted,
            name: format!("DimensionFilter({dimension})"),
        }
    }
}

impl Filter for DimensionFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn keep(&self, candidate: &Candidate) -> bool {
        dimension_matches(candidate, self.dimension, &self.accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_filter() {
        let remote = Candidate {
            id: "1".to_string(),
            location: "Remote".to_string(),
            languages: vec!["English".to_string(), "German".to_string()],
            ..Default::default()
        };
        let berlin = Candidate {
            id: "2".to_string(),
            location: "Berlin".to_string(),
            languages: vec!["English".to_string()],
            ..Default::default()
        };

        let german = DimensionFilter::new(
            Dimension::Languages,
            BTreeSet::from(["German".to_string()]),
        );
        assert_eq!(german.name(), "DimensionFilter(languages)");
        assert!(german.keep(&remote));
        assert!(!german.keep(&berlin));

        let anywhere = DimensionFilter::new(Dimension::Locations, BTreeSet::new());
        assert_eq!(anywhere.apply(vec![&remote, &berlin]).len(), 2);
    }
}
