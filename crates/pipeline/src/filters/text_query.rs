//! Free-text search filter.
//!
//! Case-insensitive substring match against a candidate's name, title,
//! location and each individual skill.

use crate::traits::Filter;
use candidate_store::Candidate;

/// Keeps candidates whose searchable fields contain the query text.
///
/// ## Algorithm
/// 1. Lowercase (and trim) the query once at construction
/// 2. An empty query keeps everything
/// 3. Otherwise keep a candidate if name, title, location or any skill
///    contains the query as a substring
pub struct TextQueryFilter {
    needle: String,
}

impl TextQueryFilter {
    /// Create a new TextQueryFilter.
    ///
    /// # Arguments
    /// * `query` - Raw text as typed by the user
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    /// True when the filter lets every candidate through
    pub fn is_noop(&self) -> bool {
        self.needle.is_empty()
    }
}

impl Filter for TextQueryFilter {
    fn name(&self) -> &str {
        "TextQueryFilter"
    }

    fn keep(&self, candidate: &Candidate) -> bool {
        if self.is_noop() {
            return true;
        }
        let hit = |field: &str| field.to_lowercase().contains(&self.needle);

        hit(&candidate.name)
            || hit(&candidate.title)
            || hit(&candidate.location)
            || candidate.skills.iter().any(|skill| hit(skill))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, title: &str, location: &str, skills: &[&str]) -> Candidate {
        Candidate {
            id: name.to_lowercase(),
            name: name.to_string(),
            title: title.to_string(),
            location: location.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            bio: "Remote-first person who loves Kubernetes".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let filter = TextQueryFilter::new("   ");
        assert!(filter.is_noop());
        assert!(filter.keep(&Candidate::default()));
    }

    #[test]
    fn test_matches_each_searchable_field() {
        let ada = candidate("Ada", "Backend Engineer", "Berlin", &["Rust", "PostgreSQL"]);

        assert!(TextQueryFilter::new("ADA").keep(&ada));
        assert!(TextQueryFilter::new("backend").keep(&ada));
        assert!(TextQueryFilter::new("erl").keep(&ada));
        assert!(TextQueryFilter::new("postgres").keep(&ada));
    }

    #[test]
    fn test_bio_is_not_searched() {
        let ada = candidate("Ada", "Backend Engineer", "Berlin", &["Rust"]);
        assert!(!TextQueryFilter::new("kubernetes").keep(&ada));
    }

    #[test]
    fn test_apply_preserves_order() {
        let a = candidate("Alice", "Engineer", "Remote", &[]);
        let b = candidate("Bob", "Designer", "Berlin", &[]);
        let c = candidate("Carol", "Engineer", "Remote", &[]);

        let kept = TextQueryFilter::new("rem").apply(vec![&a, &b, &c]);
        let names: Vec<&str> = kept.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }
}
