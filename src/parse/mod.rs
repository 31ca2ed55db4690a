//! Parsing and normalization of scraped content.
//!
//! This module turns loosely structured input into typed values:
//! - Counter text with magnitude suffixes ("1.2K") into integers
//! - Free-text queries into genre keywords
//! - Listing cards into `MapListing` records
//!
//! All HTML parsing is done using CSS selectors via the `scraper` crate.

mod keywords;
mod listing;
mod number;

// Re-export public API
pub use keywords::{find_non_map_term, Vocabulary};
pub(crate) use listing::LISTING_SELECTOR_STR;
pub use listing::{
    parse_listing, parse_listing_fragment, resolve_listing_url, truncate_description,
};
pub use number::{parse_count, suffix_multiplier, try_parse_count, MAGNITUDE_SUFFIXES};
