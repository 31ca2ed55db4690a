//! Listing deduplication by resolved URL.

use std::collections::HashSet;

use crate::error_handling::{InfoType, ProcessingStats};
use crate::models::MapListing;

/// Keeps the first listing seen for each URL, then truncates to `max_results`.
///
/// Relative order of the retained listings is their first-occurrence order.
/// Later duplicates are dropped whatever their other fields hold.
pub fn dedup_by_url(
    listings: Vec<MapListing>,
    max_results: usize,
    stats: &ProcessingStats,
) -> Vec<MapListing> {
    let mut seen = HashSet::with_capacity(listings.len());
    let mut unique: Vec<MapListing> = Vec::with_capacity(listings.len());

    for listing in listings {
        if seen.insert(listing.url.clone()) {
            unique.push(listing);
        } else {
            log::debug!("Dropping duplicate listing {}", listing.url);
            stats.increment_info(InfoType::DuplicateListing);
        }
    }

    unique.truncate(max_results);
    unique
}
