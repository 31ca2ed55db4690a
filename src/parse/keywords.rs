//! Query keyword extraction.
//!
//! Keywords are diagnostic only: they are logged and reported, the outbound
//! search always uses the raw query text.

use std::path::Path;

use crate::config::vocabulary::{DEFAULT_MAP_TYPES, FALLBACK_KEYWORD_COUNT, NON_MAP_TERMS};
use crate::error_handling::VocabularyError;

/// Closed set of map-genre terms recognised in queries.
///
/// Order matters: extracted keywords come out in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_TYPES.iter().copied())
    }
}

impl Vocabulary {
    /// Builds a vocabulary from terms, lowercasing them and dropping blanks.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Loads a vocabulary file: one term per line, `#` starts a comment line.
    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let content = std::fs::read_to_string(path).map_err(|source| VocabularyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(
            content.lines().filter(|line| !line.trim_start().starts_with('#')),
        ))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Maps a free-text query to search keywords.
    ///
    /// Returns every vocabulary term occurring as a substring of the lowercased
    /// query, in vocabulary order. When none occurs, returns the first three
    /// whitespace-separated tokens of the lowercased query instead.
    pub fn extract_keywords(&self, query: &str) -> Vec<String> {
        let query_lower = query.to_lowercase();

        let keywords: Vec<String> = self
            .terms
            .iter()
            .filter(|term| query_lower.contains(term.as_str()))
            .cloned()
            .collect();

        if !keywords.is_empty() {
            return keywords;
        }

        query_lower
            .split_whitespace()
            .take(FALLBACK_KEYWORD_COUNT)
            .map(str::to_string)
            .collect()
    }
}

/// Returns the first non-map term ("texture pack", "mod", ...) the query
/// contains as whole words, if any.
pub fn find_non_map_term(query: &str) -> Option<&'static str> {
    let padded = format!(
        " {} ",
        query.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
    );
    NON_MAP_TERMS
        .iter()
        .copied()
        .find(|term| padded.contains(&format!(" {term} ")))
}
