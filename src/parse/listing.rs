//! Listing card extraction.
//!
//! A search results page renders each map as a `div.resource_content` card.
//! Only the title link is mandatory; every other field falls back to its
//! default on its own when its element is missing.

use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::{
    DEFAULT_AUTHOR, DEFAULT_CATEGORY, DEFAULT_VERSION, ELLIPSIS, MAX_DESCRIPTION_CHARS,
    SOURCE_NAME,
};
use crate::error_handling::{InfoType, ListingError, ProcessingStats, WarningType};
use crate::models::MapListing;
use crate::utils::parse_selector_with_fallback;

use super::number::{parse_count, suffix_class};

// CSS selector strings
pub(crate) const LISTING_SELECTOR_STR: &str = "div.resource_content";
const TITLE_SELECTOR_STR: &str = "a.r-title";
const THUMBNAIL_SELECTOR_STR: &str = "img.r-preview";
const AUTHOR_SELECTOR_STR: &str = "a.r-author";
const STATS_SELECTOR_STR: &str = "div.r-stats";
const DESCRIPTION_SELECTOR_STR: &str = "div.r-description";
const CATEGORY_SELECTOR_STR: &str = "div.r-type";
const VERSION_SELECTOR_STR: &str = "span.r-version";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(TITLE_SELECTOR_STR, "listing title"));
static THUMBNAIL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(THUMBNAIL_SELECTOR_STR, "listing thumbnail"));
static AUTHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(AUTHOR_SELECTOR_STR, "listing author"));
static STATS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(STATS_SELECTOR_STR, "listing statistics"));
static DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(DESCRIPTION_SELECTOR_STR, "listing description")
});
static CATEGORY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(CATEGORY_SELECTOR_STR, "listing category"));
static VERSION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(VERSION_SELECTOR_STR, "listing version"));

// Counter patterns: number, optional magnitude suffix, then the counter word.
static DOWNLOADS_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| build_counter_regex(r"downloads?"));
static LIKES_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| build_counter_regex(r"(?:diamonds?|likes?)"));

fn build_counter_regex(word: &str) -> Option<Regex> {
    let pattern = format!(
        r"(?i)(\d+(?:,\d{{3}})*(?:\.\d+)?)({})\s*{}",
        suffix_class(),
        word
    );
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("Failed to compile counter pattern '{}': {}", pattern, e);
            None
        }
    }
}

/// Parses one listing card into a `MapListing`.
///
/// # Arguments
///
/// * `element` - The listing card element
/// * `base_url` - Origin the title link is resolved against
/// * `stats` - Records missing optional fields and truncations
///
/// # Errors
///
/// `ListingError::MissingTitle` if the card has no title link, and
/// `ListingError::InvalidUrl` if its href cannot be resolved. No partial
/// record is produced in either case.
pub fn parse_listing(
    element: ElementRef<'_>,
    base_url: &Url,
    stats: &ProcessingStats,
) -> Result<MapListing, ListingError> {
    let title_element = element
        .select(&TITLE_SELECTOR)
        .next()
        .ok_or(ListingError::MissingTitle)?;

    let title = element_text(title_element);
    let href = title_element.value().attr("href").unwrap_or_default();
    let url = resolve_listing_url(base_url, href)?;

    let thumbnail = extract_thumbnail(element, stats);
    let author = extract_text_or_default(
        element,
        &AUTHOR_SELECTOR,
        DEFAULT_AUTHOR,
        WarningType::MissingAuthor,
        stats,
    );
    let (downloads, likes) = extract_counters(element, stats);
    let description = extract_description(element, stats);
    let category = extract_text_or_default(
        element,
        &CATEGORY_SELECTOR,
        DEFAULT_CATEGORY,
        WarningType::MissingCategory,
        stats,
    );
    let version = extract_text_or_default(
        element,
        &VERSION_SELECTOR,
        DEFAULT_VERSION,
        WarningType::MissingVersion,
        stats,
    );

    log::debug!(
        "Parsed listing '{}' ({} downloads, {} likes) -> {}",
        title,
        downloads,
        likes,
        url
    );

    Ok(MapListing {
        title,
        author,
        description,
        url,
        thumbnail,
        downloads,
        likes,
        category,
        version,
        source: SOURCE_NAME.to_string(),
        scraped_at: Utc::now(),
        link_valid: None,
    })
}

/// Parses a standalone HTML fragment holding a single listing card.
pub fn parse_listing_fragment(
    html: &str,
    base_url: &Url,
    stats: &ProcessingStats,
) -> Result<MapListing, ListingError> {
    let fragment = Html::parse_fragment(html);
    parse_listing(fragment.root_element(), base_url, stats)
}

/// Resolves a (possibly site-relative) listing href against the base origin.
pub fn resolve_listing_url(base_url: &Url, href: &str) -> Result<String, ListingError> {
    base_url
        .join(href)
        .map(String::from)
        .map_err(|e| ListingError::InvalidUrl {
            href: href.to_string(),
            reason: e.to_string(),
        })
}

/// Caps a description at `MAX_DESCRIPTION_CHARS` characters.
///
/// Returns the possibly shortened text and whether it was truncated. A
/// truncated description keeps exactly its first `MAX_DESCRIPTION_CHARS`
/// characters followed by `ELLIPSIS`.
pub fn truncate_description(text: &str) -> (String, bool) {
    match text.char_indices().nth(MAX_DESCRIPTION_CHARS) {
        Some((cut, _)) => (format!("{}{}", &text[..cut], ELLIPSIS), true),
        None => (text.to_string(), false),
    }
}

/// Text of an element with whitespace runs collapsed to single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn extract_text_or_default(
    element: ElementRef<'_>,
    selector: &Selector,
    default: &str,
    warning: WarningType,
    stats: &ProcessingStats,
) -> String {
    match element.select(selector).next() {
        Some(found) => element_text(found),
        None => {
            stats.increment_warning(warning);
            default.to_string()
        }
    }
}

fn extract_thumbnail(element: ElementRef<'_>, stats: &ProcessingStats) -> String {
    let Some(image) = element.select(&THUMBNAIL_SELECTOR).next() else {
        stats.increment_warning(WarningType::MissingThumbnail);
        return String::new();
    };

    // Lazy-loaded previews leave `src` empty and carry the real URL in `data-src`
    ["src", "data-src"]
        .iter()
        .filter_map(|attr| image.value().attr(attr))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn extract_counters(element: ElementRef<'_>, stats: &ProcessingStats) -> (u64, u64) {
    let Some(block) = element.select(&STATS_SELECTOR).next() else {
        stats.increment_warning(WarningType::MissingStats);
        return (0, 0);
    };

    let text: String = block.text().collect();
    (
        match_counter(DOWNLOADS_REGEX.as_ref(), &text),
        match_counter(LIKES_REGEX.as_ref(), &text),
    )
}

fn match_counter(regex: Option<&Regex>, text: &str) -> u64 {
    regex
        .and_then(|re| re.captures(text))
        .map(|caps| {
            let number = caps.get(1).map_or("", |m| m.as_str());
            let suffix = caps.get(2).map_or("", |m| m.as_str());
            parse_count(number, suffix)
        })
        .unwrap_or(0)
}

fn extract_description(element: ElementRef<'_>, stats: &ProcessingStats) -> String {
    let Some(block) = element.select(&DESCRIPTION_SELECTOR).next() else {
        stats.increment_warning(WarningType::MissingDescription);
        return String::new();
    };

    let (description, truncated) = truncate_description(&element_text(block));
    if truncated {
        stats.increment_info(InfoType::DescriptionTruncated);
    }
    description
}
