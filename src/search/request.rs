//! Outbound search request.

use reqwest::Client;
use tokio_retry::RetryIf;
use url::Url;

use crate::config::{SEARCH_KEYWORDS_PARAM, SEARCH_ORDER, SEARCH_PAGE, SEARCH_PATH};
use crate::error_handling::{
    get_retry_strategy, is_retriable_error, InfoType, ProcessingStats, SearchError,
};

/// Builds the search URL for a query against the listing site's origin.
///
/// The query text is URL-encoded as the `keywords` parameter; results are
/// ordered by popularity and only the first page is requested.
///
/// # Errors
///
/// Returns `SearchError::InvalidUrl` if the search path cannot be joined onto
/// `base_url`.
pub fn build_search_url(base_url: &Url, query: &str) -> Result<Url, SearchError> {
    let mut url = base_url.join(SEARCH_PATH)?;
    url.query_pairs_mut()
        .clear()
        .append_pair(SEARCH_KEYWORDS_PARAM, query)
        .append_pair("order", SEARCH_ORDER)
        .append_pair("page", SEARCH_PAGE);
    Ok(url)
}

/// Fetches the search results page and returns its body.
///
/// Transient failures (timeouts, connection errors, 429, 5xx) are retried
/// per `get_retry_strategy`; each retry is counted as `InfoType::SearchRetry`.
///
/// # Errors
///
/// Returns the last `SearchError` once retries are exhausted, or the first
/// non-retriable one.
pub async fn fetch_search_page(
    client: &Client,
    url: &Url,
    stats: &ProcessingStats,
) -> Result<String, SearchError> {
    let mut attempts = 0usize;

    let result = RetryIf::spawn(
        get_retry_strategy(),
        || {
            attempts += 1;
            if attempts > 1 {
                log::info!("Retrying search request (attempt {})", attempts);
                stats.increment_info(InfoType::SearchRetry);
            }
            fetch_once(client, url)
        },
        is_retriable_error,
    )
    .await;

    if let Err(ref e) = result {
        log::debug!("Search request gave up after {} attempt(s): {}", attempts, e);
    }
    result
}

async fn fetch_once(client: &Client, url: &Url) -> Result<String, SearchError> {
    log::debug!("GET {}", url);
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
