//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the source site layout, timeouts, field defaults and limits.

// Source site
/// Origin every listing link is resolved against.
pub const DEFAULT_BASE_URL: &str = "https://www.planetminecraft.com";
/// Search endpoint, relative to the base origin.
pub const SEARCH_PATH: &str = "/resources/projects/";
/// Query parameter carrying the free-text search.
pub const SEARCH_KEYWORDS_PARAM: &str = "keywords";
/// Result ordering requested from the site (most popular first).
pub const SEARCH_ORDER: &str = "order_popularity";
/// Only the first results page is ever requested.
pub const SEARCH_PAGE: &str = "1";
/// Label stamped on every listing as its `source`.
pub const SOURCE_NAME: &str = "Planet Minecraft";

/// Default User-Agent string for HTTP requests.
///
/// A plain browser string; the listing site rejects obvious bot agents.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// Network operation timeouts
/// Timeout for the search page request in seconds
pub const SEARCH_TIMEOUT_SECS: u64 = 30;
/// Timeout for each link check (HEAD request) in seconds
pub const VALIDATION_TIMEOUT_SECS: u64 = 10;
/// Pause between consecutive link checks in milliseconds
pub const VALIDATION_DELAY_MS: u64 = 500;

// Redirect handling
/// Maximum number of redirect hops followed by link checks
pub const MAX_REDIRECT_HOPS: usize = 10;

// Retry strategy (search request only)
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 5;
/// Maximum number of retries after the initial attempt
pub const RETRY_MAX_ATTEMPTS: usize = 2;

// Results
/// Number of maps requested when the caller does not say
pub const DEFAULT_MAX_RESULTS: usize = 20;
/// Snapshot file name, placed next to the executable when `--output` is not given
pub const DEFAULT_SNAPSHOT_FILE: &str = "maps-data.json";

// Listing field limits and defaults
/// Descriptions longer than this many characters are truncated
pub const MAX_DESCRIPTION_CHARS: usize = 200;
/// Appended to a truncated description
pub const ELLIPSIS: &str = "...";
pub const DEFAULT_AUTHOR: &str = "Unknown";
pub const DEFAULT_CATEGORY: &str = "Map";
pub const DEFAULT_VERSION: &str = "Unknown";
