//! Records produced and persisted by a search run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error_handling::QueryError;

/// One map listing extracted from the search results page.
///
/// Created only by the listing parser. The link validator is the one stage
/// allowed to touch it afterwards, and only to set `link_valid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapListing {
    pub title: String,
    pub author: String,
    pub description: String,
    /// Absolute URL of the listing page; the dedup key.
    pub url: String,
    pub thumbnail: String,
    pub downloads: u64,
    pub likes: u64,
    pub category: String,
    pub version: String,
    pub source: String,
    /// Capture time, not listing time.
    pub scraped_at: DateTime<Utc>,
    /// Set by the link validator. Absent means "not checked", which counts as valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_valid: Option<bool>,
}

impl MapListing {
    /// Whether the listing survives link filtering.
    pub fn is_link_valid(&self) -> bool {
        self.link_valid.unwrap_or(true)
    }
}

/// Validated search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    max_results: usize,
}

impl SearchQuery {
    /// Builds a query, rejecting blank text and a zero result limit.
    pub fn new(text: impl Into<String>, max_results: usize) -> Result<Self, QueryError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        if max_results == 0 {
            return Err(QueryError::ZeroMaxResults);
        }
        Ok(Self { text, max_results })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

/// The persisted result of the most recent run.
///
/// Fields are read-only so `map_count` keeps matching `maps.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    last_updated: DateTime<Utc>,
    query: String,
    map_count: usize,
    maps: Vec<MapListing>,
}

impl Snapshot {
    pub fn new(query: impl Into<String>, maps: Vec<MapListing>) -> Self {
        Self {
            last_updated: Utc::now(),
            query: query.into(),
            map_count: maps.len(),
            maps,
        }
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn map_count(&self) -> usize {
        self.map_count
    }

    pub fn maps(&self) -> &[MapListing] {
        &self.maps
    }

    /// Consumes the snapshot, returning its listings.
    pub fn into_maps(self) -> Vec<MapListing> {
        self.maps
    }
}
