//! Search orchestration.
//!
//! Issues the one outbound search request, locates the listing cards in the
//! returned page and parses each of them. Nothing fails past this module: a
//! failed request yields an empty result set, and a card that cannot be
//! parsed is logged, counted and skipped.

mod request;

use std::sync::LazyLock;

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error_handling::{update_error_stats, ProcessingStats};
use crate::models::{MapListing, SearchQuery};
use crate::parse::{parse_listing, LISTING_SELECTOR_STR};
use crate::utils::parse_selector_with_fallback;

pub use request::{build_search_url, fetch_search_page};

static LISTING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(LISTING_SELECTOR_STR, "listing cards"));

/// Extracts up to `max_results` listings from a search results page.
///
/// Cards are taken in document order and capped before parsing, so cards that
/// fail to parse are not replaced by later ones.
pub fn extract_listings(
    html: &str,
    base_url: &Url,
    max_results: usize,
    stats: &ProcessingStats,
) -> Vec<MapListing> {
    let document = Html::parse_document(html);
    let mut listings = Vec::new();

    for (index, card) in document
        .select(&LISTING_SELECTOR)
        .take(max_results)
        .enumerate()
    {
        match parse_listing(card, base_url, stats) {
            Ok(listing) => listings.push(listing),
            Err(e) => {
                log::warn!("Skipping listing #{}: {}", index + 1, e);
                stats.increment_error(e.error_type());
            }
        }
    }

    listings
}

/// Runs the search for `query` against the site at `base_url`.
///
/// Returns the parsed listings in page order, or an empty set if the request
/// fails or the page holds no listings.
pub async fn search_listings(
    client: &Client,
    base_url: &Url,
    query: &SearchQuery,
    stats: &ProcessingStats,
) -> Vec<MapListing> {
    let url = match build_search_url(base_url, query.text()) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Cannot build search URL for '{}': {}", query.text(), e);
            update_error_stats(stats, &e);
            return Vec::new();
        }
    };

    log::info!("Searching {} for '{}'", url, query.text());

    let body = match fetch_search_page(client, &url, stats).await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Search request failed: {}", e);
            update_error_stats(stats, &e);
            return Vec::new();
        }
    };

    let listings = extract_listings(&body, base_url, query.max_results(), stats);
    if listings.is_empty() {
        log::info!("No listings found for '{}'", query.text());
    } else {
        log::info!("Parsed {} listing(s)", listings.len());
    }
    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorType;

    fn base() -> Url {
        Url::parse("https://www.planetminecraft.com").expect("valid base url")
    }

    fn card(slug: &str) -> String {
        format!(
            r#"<div class="resource_content"><a class="r-title" href="/project/{slug}/">{slug}</a></div>"#
        )
    }

    fn page(cards: &[String]) -> String {
        format!("<html><body><div id=\"results\">{}</div></body></html>", cards.concat())
    }

    #[test]
    fn test_extract_listings_in_page_order() {
        let stats = ProcessingStats::new();
        let html = page(&[card("a"), card("b"), card("c")]);
        let listings = extract_listings(&html, &base(), 20, &stats);
        let titles: Vec<&str> = listings.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_extract_listings_caps_cards() {
        let stats = ProcessingStats::new();
        let html = page(&[card("a"), card("b"), card("c")]);
        assert_eq!(extract_listings(&html, &base(), 2, &stats).len(), 2);
    }

    #[test]
    fn test_extract_listings_skips_broken_cards() {
        let stats = ProcessingStats::new();
        let untitled = r#"<div class="resource_content"><a class="r-author">x</a></div>"#.to_string();
        let html = page(&[card("a"), untitled, card("c")]);
        let listings = extract_listings(&html, &base(), 20, &stats);
        assert_eq!(listings.len(), 2);
        assert_eq!(stats.get_error_count(ErrorType::ListingMissingTitle), 1);
    }

    #[test]
    fn test_extract_listings_empty_page() {
        let stats = ProcessingStats::new();
        let listings = extract_listings("<html><body>No results</body></html>", &base(), 20, &stats);
        assert!(listings.is_empty());
        assert_eq!(stats.total_errors(), 0);
    }
}
