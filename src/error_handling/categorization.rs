//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize errors and configure retry strategies.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::stats::ProcessingStats;
use super::types::{ErrorType, SearchError};

/// Creates an exponential backoff retry strategy for the search request.
///
/// Returns a retry strategy configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR`
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - At most `RETRY_MAX_ATTEMPTS` retries after the first attempt
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    // tokio-retry yields base^n * factor, so the growth rate goes in `from_millis`
    // and the factor scales the first delay up to `RETRY_INITIAL_DELAY_MS`.
    ExponentialBackoff::from_millis(crate::config::RETRY_FACTOR)
        .factor(crate::config::RETRY_INITIAL_DELAY_MS / crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(crate::config::RETRY_MAX_ATTEMPTS)
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    // Check HTTP status codes first
    if let Some(status) = error.status() {
        match status.as_u16() {
            403 => return ErrorType::HttpRequestBotDetectionError,
            404 => return ErrorType::HttpRequestNotFound,
            429 => return ErrorType::HttpRequestTooManyRequests,
            _ if status.is_server_error() => return ErrorType::HttpRequestServerError,
            _ if status.is_client_error() => return ErrorType::HttpRequestStatusError,
            _ => {}
        }
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Decides whether a failed search request is worth another attempt.
///
/// Timeouts, connection failures, 429 and 5xx responses are transient;
/// everything else (403, 404, a malformed URL) will fail the same way again.
pub fn is_retriable_error(error: &SearchError) -> bool {
    match error {
        SearchError::InvalidUrl(_) => false,
        SearchError::Request { kind, .. } => matches!(
            kind,
            ErrorType::HttpRequestTimeoutError
                | ErrorType::HttpRequestConnectError
                | ErrorType::HttpRequestRequestError
                | ErrorType::HttpRequestBodyError
                | ErrorType::HttpRequestTooManyRequests
                | ErrorType::HttpRequestServerError
        ),
    }
}

/// Records a search failure in the processing statistics.
pub fn update_error_stats(stats: &ProcessingStats, error: &SearchError) {
    match error {
        SearchError::InvalidUrl(_) => stats.increment_error(ErrorType::HttpRequestBuilderError),
        SearchError::Request { kind, .. } => stats.increment_error(*kind),
    }
}
