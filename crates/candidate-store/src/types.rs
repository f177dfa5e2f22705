//! Core domain types for the talent pool.
//!
//! This module defines the candidate record, the closed set of filter
//! dimensions, and the in-memory store that owns the collection.
//! Key points:
//! - Type aliases for domain clarity (CandidateId)
//! - A closed enum for filter dimensions instead of string-keyed maps
//! - The store owns candidates; callers only ever borrow them

use crate::error::UnknownDimension;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique, stable identifier for a candidate within a session
pub type CandidateId = String;

// =============================================================================
// Candidate
// =============================================================================

/// A candidate profile as provided by the data source.
///
/// Only `bookmarked` is ever changed after loading, and only through
/// `CandidateStore::toggle_bookmark`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub title: String,
    pub location: String,
    /// Free-text bucket such as "3-5 years" or "10+ years"
    #[serde(alias = "experience")]
    pub experience_band: String,
    pub remote_preference: String,
    pub availability: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub bio: String,
    pub last_active_at: DateTime<Utc>,
    pub date_added: DateTime<Utc>,
    #[serde(default)]
    pub flagged: bool,
    #[serde(default)]
    pub bookmarked: bool,
}

impl Candidate {
    /// The candidate's value(s) for a filter dimension.
    ///
    /// Single-valued attributes come back as a one-element slice so every
    /// dimension can be matched the same way (set intersection).
    pub fn dimension_values(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Locations => std::slice::from_ref(&self.location),
            Dimension::Skills => &self.skills,
            Dimension::Experience => std::slice::from_ref(&self.experience_band),
            Dimension::RemotePreference => std::slice::from_ref(&self.remote_preference),
            Dimension::Availability => std::slice::from_ref(&self.availability),
            Dimension::Languages => &self.languages,
            Dimension::Certifications => &self.certifications,
        }
    }
}

// =============================================================================
// Filter Dimensions
// =============================================================================

/// The seven filterable facets of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Locations,
    Skills,
    Experience,
    RemotePreference,
    Availability,
    Languages,
    Certifications,
}

impl Dimension {
    /// All dimensions in canonical order
    pub const ALL: [Dimension; 7] = [
        Dimension::Locations,
        Dimension::Skills,
        Dimension::Experience,
        Dimension::RemotePreference,
        Dimension::Availability,
        Dimension::Languages,
        Dimension::Certifications,
    ];

    /// Stable key used in persisted payloads and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Locations => "locations",
            Dimension::Skills => "skills",
            Dimension::Experience => "experience",
            Dimension::RemotePreference => "remotePreference",
            Dimension::Availability => "availability",
            Dimension::Languages => "languages",
            Dimension::Certifications => "certifications",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = UnknownDimension;

    /// Accepts the stable key, case-insensitively, plus a few singular
    /// spellings ("location", "skill", ...) for command-line use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "locations" | "location" => Ok(Dimension::Locations),
            "skills" | "skill" => Ok(Dimension::Skills),
            "experience" => Ok(Dimension::Experience),
            "remotepreference" | "remote-preference" | "remote" => {
                Ok(Dimension::RemotePreference)
            }
            "availability" => Ok(Dimension::Availability),
            "languages" | "language" => Ok(Dimension::Languages),
            "certifications" | "certification" => Ok(Dimension::Certifications),
            _ => Err(UnknownDimension(s.to_string())),
        }
    }
}

/// One selectable value of a dimension and how many candidates carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetValue {
    pub value: String,
    pub count: usize,
}

// =============================================================================
// CandidateStore - The In-Memory Collection
// =============================================================================

/// Holds the immutable base collection plus the per-candidate bookmark flag.
///
/// Candidates keep their snapshot order; that order is the tie-breaker
/// for stable sorting further down the pipeline.
#[derive(Debug, Default)]
pub struct CandidateStore {
    pub(crate) candidates: Vec<Candidate>,
    /// Position of each candidate in `candidates`
    pub(crate) positions: HashMap<CandidateId, usize>,
}

impl CandidateStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a candidate by id
    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.positions.get(id).map(|&pos| &self.candidates[pos])
    }

    /// All candidates in snapshot order
    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Flip the bookmark flag of a candidate.
    ///
    /// Returns the new state, or `None` if no candidate has this id
    /// (in which case nothing changes).
    pub fn toggle_bookmark(&mut self, id: &str) -> Option<bool> {
        let pos = *self.positions.get(id)?;
        let candidate = &mut self.candidates[pos];
        candidate.bookmarked = !candidate.bookmarked;
        tracing::debug!(
            "Bookmark toggled for {} (now {})",
            candidate.id,
            candidate.bookmarked
        );
        Some(candidate.bookmarked)
    }

    /// Ids of all bookmarked candidates, in snapshot order
    pub fn bookmarked_ids(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .filter(|c| c.bookmarked)
            .map(|c| c.id.as_str())
            .collect()
    }
}
