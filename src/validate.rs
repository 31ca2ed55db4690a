//! Listing link validation.
//!
//! Each listing page gets one HEAD request through the validation client
//! (short timeout, redirects followed). Only a final `200 OK` counts as valid;
//! any other status, and any transport failure, marks the link invalid.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error_handling::{categorize_reqwest_error, ErrorType, InfoType, ProcessingStats};
use crate::models::MapListing;

/// Outcome of a single link check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// The final response was `200 OK`.
    Ok,
    /// The server answered with another status (including other 2xx codes).
    Status(StatusCode),
    /// No response: timeout, connection failure, redirect loop, ...
    Unreachable(ErrorType),
}

impl LinkStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, LinkStatus::Ok)
    }
}

/// Issues a HEAD request against `url` and classifies the outcome.
///
/// Never fails: transport errors become `LinkStatus::Unreachable`.
pub async fn check_link(client: &Client, url: &str) -> LinkStatus {
    match client.head(url).send().await {
        Ok(response) if response.status() == StatusCode::OK => LinkStatus::Ok,
        Ok(response) => LinkStatus::Status(response.status()),
        Err(e) => {
            log::debug!("Link check for {} failed: {}", url, e);
            LinkStatus::Unreachable(categorize_reqwest_error(&e))
        }
    }
}

/// Checks every listing in order and sets its `link_valid` flag.
///
/// Sleeps `delay` between consecutive checks. Returns all listings, valid or
/// not; see [`validate_links`] for the filtering variant.
pub async fn annotate_links(
    client: &Client,
    listings: Vec<MapListing>,
    delay: Duration,
    stats: &ProcessingStats,
) -> Vec<MapListing> {
    let total = listings.len();
    let mut checked = Vec::with_capacity(total);

    for (index, mut listing) in listings.into_iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let status = check_link(client, &listing.url).await;
        match status {
            LinkStatus::Ok => {}
            LinkStatus::Status(code) => {
                log::warn!("Broken link ({}): {}", code, listing.url);
                stats.increment_info(InfoType::BrokenLink);
            }
            LinkStatus::Unreachable(kind) => {
                log::warn!("Unreachable link ({}): {}", kind, listing.url);
                stats.increment_info(InfoType::UnreachableLink);
            }
        }
        log::debug!("Checked link {}/{}: {}", index + 1, total, listing.url);

        listing.link_valid = Some(status.is_valid());
        checked.push(listing);
    }

    checked
}

/// Checks every listing's link and keeps only the valid ones, in order.
pub async fn validate_links(
    client: &Client,
    listings: Vec<MapListing>,
    delay: Duration,
    stats: &ProcessingStats,
) -> Vec<MapListing> {
    let total = listings.len();
    log::info!("Validating {} link(s)", total);

    let mut valid = annotate_links(client, listings, delay, stats).await;
    valid.retain(MapListing::is_link_valid);

    if valid.len() < total {
        log::info!("Removed {} listing(s) with broken links", total - valid.len());
    }
    valid
}
