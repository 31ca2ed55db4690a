//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Rejected search input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The query text is empty or whitespace only.
    #[error("Search query must not be empty")]
    EmptyQuery,

    /// The result limit is zero.
    #[error("Maximum result count must be a positive integer")]
    ZeroMaxResults,
}

/// Failure of the outbound search request.
///
/// Never escapes the orchestrator: `search_listings` logs it and returns an
/// empty result set.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The configured base URL cannot be turned into a search URL.
    #[error("Invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport failure or HTTP error status.
    #[error("Search request failed ({kind}): {source}")]
    Request {
        /// Categorized failure
        kind: ErrorType,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },
}

impl From<ReqwestError> for SearchError {
    fn from(source: ReqwestError) -> Self {
        SearchError::Request {
            kind: super::categorize_reqwest_error(&source),
            source,
        }
    }
}

/// Reason a single listing fragment produced no record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// The title-and-link element is absent.
    #[error("Listing has no title element")]
    MissingTitle,

    /// The title link cannot be resolved against the base origin.
    #[error("Listing link '{href}' cannot be resolved: {reason}")]
    InvalidUrl {
        /// Raw href attribute
        href: String,
        /// Parser message
        reason: String,
    },
}

impl ListingError {
    /// The statistics category this failure is counted under.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ListingError::MissingTitle => ErrorType::ListingMissingTitle,
            ListingError::InvalidUrl { .. } => ErrorType::ListingInvalidUrl,
        }
    }
}

/// Error loading a keyword vocabulary file.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// The file cannot be read.
    #[error("Cannot read vocabulary file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error types for snapshot persistence.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Filesystem failure (directory creation, temp file, rename, read).
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failure.
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The temp file could not be moved over the destination.
    #[error("Snapshot persist error: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Types of errors that can occur during a search run.
///
/// This enum categorizes actual error conditions - failures that drop data
/// (a whole search page, a listing, or a link check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    HttpRequestNotFound,
    HttpRequestServerError,
    // Listing extraction errors
    ListingMissingTitle,
    ListingInvalidUrl,
}

/// Types of warnings that can occur while parsing listings.
///
/// Warnings indicate missing optional data that was replaced by its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum WarningType {
    MissingAuthor,
    MissingThumbnail,
    MissingStats,
    MissingDescription,
    MissingCategory,
    MissingVersion,
}

/// Types of informational metrics recorded during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    DescriptionTruncated,
    DuplicateListing,
    BrokenLink,      // Non-200 status on the link check
    UnreachableLink, // Transport failure on the link check
    SearchRetry,
    NonMapQuery,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
            ErrorType::ListingMissingTitle => "Listing without title",
            ErrorType::ListingInvalidUrl => "Listing with unresolvable link",
        }
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingAuthor => "Missing author",
            WarningType::MissingThumbnail => "Missing thumbnail",
            WarningType::MissingStats => "Missing statistics block",
            WarningType::MissingDescription => "Missing description",
            WarningType::MissingCategory => "Missing category",
            WarningType::MissingVersion => "Missing version",
        }
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::DescriptionTruncated => "Description truncated",
            InfoType::DuplicateListing => "Duplicate listing dropped",
            InfoType::BrokenLink => "Broken link",
            InfoType::UnreachableLink => "Unreachable link",
            InfoType::SearchRetry => "Search request retried",
            InfoType::NonMapQuery => "Query looks like a non-map search",
        }
    }
}
