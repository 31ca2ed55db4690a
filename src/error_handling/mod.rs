//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Retry strategy configuration for the search request
//!
//! Error types are categorized into:
//! - **Errors**: Failures that drop data (a search page or a listing)
//! - **Warnings**: Missing optional listing fields replaced by their defaults
//! - **Info**: Informational metrics (truncations, duplicates, broken links)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_reqwest_error, get_retry_strategy, is_retriable_error, update_error_stats,
};
pub use stats::ProcessingStats;
pub use types::{
    ErrorType, InfoType, InitializationError, ListingError, QueryError, SearchError,
    SnapshotError, VocabularyError, WarningType,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::ListingMissingTitle);
        assert_eq!(stats.get_error_count(ErrorType::ListingMissingTitle), 1);

        stats.increment_warning(WarningType::MissingAuthor);
        assert_eq!(stats.get_warning_count(WarningType::MissingAuthor), 1);

        stats.increment_info(InfoType::DuplicateListing);
        assert_eq!(stats.get_info_count(InfoType::DuplicateListing), 1);
    }

    #[test]
    fn test_processing_stats_counts_in_declaration_order() {
        let stats = ProcessingStats::new();
        stats.increment_info(InfoType::BrokenLink);
        stats.increment_info(InfoType::DescriptionTruncated);
        stats.increment_info(InfoType::BrokenLink);

        assert_eq!(
            stats.info_counts(),
            vec![(InfoType::DescriptionTruncated, 1), (InfoType::BrokenLink, 2)]
        );
        assert!(stats.error_counts().is_empty());
        assert!(stats.warning_counts().is_empty());
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::default();
        stats.increment_error(ErrorType::ListingMissingTitle);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_warning(WarningType::MissingCategory);
        stats.increment_info(InfoType::BrokenLink);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
        assert_eq!(stats.total_info(), 1);
    }
}
