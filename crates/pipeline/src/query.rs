//! The serializable description of an active search.
//!
//! `QueryConfig` is exactly what gets persisted and exactly what a saved
//! search snapshots. Every field carries `#[serde(default)]`, so payloads
//! written by older or newer builds still parse.

use candidate_store::Dimension;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Accepted values per filter dimension.
///
/// An empty set means "no constraint" for that dimension. `BTreeSet`
/// keeps serialization order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSet {
    pub locations: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub experience: BTreeSet<String>,
    pub remote_preference: BTreeSet<String>,
    pub availability: BTreeSet<String>,
    pub languages: BTreeSet<String>,
    pub certifications: BTreeSet<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted values for one dimension
    pub fn values(&self, dimension: Dimension) -> &BTreeSet<String> {
        match dimension {
            Dimension::Locations => &self.locations,
            Dimension::Skills => &self.skills,
            Dimension::Experience => &self.experience,
            Dimension::RemotePreference => &self.remote_preference,
            Dimension::Availability => &self.availability,
            Dimension::Languages => &self.languages,
            Dimension::Certifications => &self.certifications,
        }
    }

    fn values_mut(&mut self, dimension: Dimension) -> &mut BTreeSet<String> {
        match dimension {
            Dimension::Locations => &mut self.locations,
            Dimension::Skills => &mut self.skills,
            Dimension::Experience => &mut self.experience,
            Dimension::RemotePreference => &mut self.remote_preference,
            Dimension::Availability => &mut self.availability,
            Dimension::Languages => &mut self.languages,
            Dimension::Certifications => &mut self.certifications,
        }
    }

    /// Add the value if absent, remove it if present.
    ///
    /// Returns `true` when the value is selected afterwards.
    pub fn toggle(&mut self, dimension: Dimension, value: impl Into<String>) -> bool {
        let value = value.into();
        let values = self.values_mut(dimension);
        if values.remove(&value) {
            false
        } else {
            values.insert(value);
            true
        }
    }

    /// Builder-style insert, mostly for tests and saved-search fixtures
    pub fn with(mut self, dimension: Dimension, value: impl Into<String>) -> Self {
        self.values_mut(dimension).insert(value.into());
        self
    }

    pub fn clear_dimension(&mut self, dimension: Dimension) {
        self.values_mut(dimension).clear();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no dimension constrains anything
    pub fn is_empty(&self) -> bool {
        Dimension::ALL.iter().all(|&d| self.values(d).is_empty())
    }

    /// Number of selected values across all dimensions
    pub fn active_count(&self) -> usize {
        Dimension::ALL.iter().map(|&d| self.values(d).len()).sum()
    }

    /// Dimensions that currently constrain the result set
    pub fn active_dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        Dimension::ALL
            .into_iter()
            .filter(|&d| !self.values(d).is_empty())
    }
}

/// Result ordering selected by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recently added first
    #[default]
    Recent,
    /// Ascending by name
    Name,
    /// Most experienced first
    Experience,
}

/// Layout of the result list. Persisted, but has no effect on results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Recent => "recent",
            SortMode::Name => "name",
            SortMode::Experience => "experience",
        }
    }
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recent" => Ok(SortMode::Recent),
            "name" => Ok(SortMode::Name),
            "experience" => Ok(SortMode::Experience),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// Complete search state: free text, filters, sort and view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryConfig {
    #[serde(alias = "freeTextQuery")]
    pub query: String,
    pub filters: FilterSet,
    pub sort_mode: SortMode,
    pub view_mode: ViewMode,
}
