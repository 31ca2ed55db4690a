//! HTTP client initialization.
//!
//! This module provides functions to initialize the two HTTP clients a run
//! uses: one for the search page and one for link checks.

use std::time::Duration;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use reqwest::ClientBuilder;

/// Initializes the client used for the search request.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - The generous search timeout from the config
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_search_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}

/// Initializes the client used for link checks.
///
/// Creates a `reqwest::Client` with the short validation timeout and
/// redirect following enabled (up to `MAX_REDIRECT_HOPS`), so a moved
/// listing page is judged by its final response.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_validation_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .timeout(Duration::from_secs(config.validation_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}
