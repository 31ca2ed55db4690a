// Parse module tests.

use super::*;
use crate::error_handling::{ErrorType, InfoType, ListingError, ProcessingStats, WarningType};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://www.planetminecraft.com").expect("valid base url")
}

fn test_error_stats() -> ProcessingStats {
    ProcessingStats::new()
}

const FULL_LISTING: &str = r#"
    <div class="resource_content">
        <img class="r-preview" src="https://static.example.com/castle.jpg">
        <a class="r-title" href="/project/epic-castle/">Epic Castle</a>
        <a class="r-author" href="/member/builder/">builder</a>
        <div class="r-stats">
            <span>1.2K downloads</span>
            <span>340 diamonds</span>
        </div>
        <div class="r-description">A huge castle with dungeons.</div>
        <div class="r-type">Adventure Map</div>
        <span class="r-version">1.20.4</span>
    </div>
"#;

#[test]
fn test_parse_full_listing() {
    let stats = test_error_stats();
    let map = parse_listing_fragment(FULL_LISTING, &base_url(), &stats).expect("should parse");

    assert_eq!(map.title, "Epic Castle");
    assert_eq!(map.url, "https://www.planetminecraft.com/project/epic-castle/");
    assert_eq!(map.author, "builder");
    assert_eq!(map.thumbnail, "https://static.example.com/castle.jpg");
    assert_eq!(map.downloads, 1_200);
    assert_eq!(map.likes, 340);
    assert_eq!(map.description, "A huge castle with dungeons.");
    assert_eq!(map.category, "Adventure Map");
    assert_eq!(map.version, "1.20.4");
    assert_eq!(map.source, "Planet Minecraft");
    assert_eq!(map.link_valid, None);
    assert_eq!(stats.total_warnings(), 0);
}

#[test]
fn test_missing_title_yields_no_record() {
    let html = r#"
        <div class="resource_content">
            <a class="r-author" href="/member/builder/">builder</a>
            <div class="r-description">Orphan description</div>
        </div>
    "#;
    let stats = test_error_stats();
    let result = parse_listing_fragment(html, &base_url(), &stats);
    assert_eq!(result, Err(ListingError::MissingTitle));
}

#[test]
fn test_title_without_class_is_not_a_title() {
    let html = r#"<div class="resource_content"><a href="/project/x/">X</a></div>"#;
    let stats = test_error_stats();
    assert_eq!(
        parse_listing_fragment(html, &base_url(), &stats),
        Err(ListingError::MissingTitle)
    );
}

#[test]
fn test_optional_fields_default_independently() {
    let html = r#"
        <div class="resource_content">
            <a class="r-title" href="/project/plain/">Plain</a>
            <span class="r-version">1.19</span>
        </div>
    "#;
    let stats = test_error_stats();
    let map = parse_listing_fragment(html, &base_url(), &stats).expect("should parse");

    assert_eq!(map.author, "Unknown");
    assert_eq!(map.category, "Map");
    assert_eq!(map.version, "1.19");
    assert_eq!(map.description, "");
    assert_eq!(map.thumbnail, "");
    assert_eq!(map.downloads, 0);
    assert_eq!(map.likes, 0);

    assert_eq!(stats.get_warning_count(WarningType::MissingAuthor), 1);
    assert_eq!(stats.get_warning_count(WarningType::MissingCategory), 1);
    assert_eq!(stats.get_warning_count(WarningType::MissingVersion), 0);
    assert_eq!(stats.get_warning_count(WarningType::MissingStats), 1);
    assert_eq!(stats.get_warning_count(WarningType::MissingThumbnail), 1);
    assert_eq!(stats.get_warning_count(WarningType::MissingDescription), 1);
}

#[test]
fn test_long_description_is_truncated() {
    let long: String = (0..250).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let html = format!(
        r#"<div class="resource_content">
            <a class="r-title" href="/project/long/">Long</a>
            <div class="r-description">{long}</div>
        </div>"#
    );
    let stats = test_error_stats();
    let map = parse_listing_fragment(&html, &base_url(), &stats).expect("should parse");

    assert_eq!(map.description.chars().count(), 203);
    assert!(map.description.ends_with("..."));
    assert_eq!(&map.description[..200], &long[..200]);
    assert_eq!(stats.get_info_count(InfoType::DescriptionTruncated), 1);
}

#[test]
fn test_description_at_limit_is_kept() {
    let exact = "x".repeat(200);
    let (description, truncated) = truncate_description(&exact);
    assert_eq!(description, exact);
    assert!(!truncated);
}

#[test]
fn test_truncate_description_counts_characters() {
    let text = "é".repeat(201);
    let (description, truncated) = truncate_description(&text);
    assert!(truncated);
    assert_eq!(description, format!("{}...", "é".repeat(200)));
}

#[test]
fn test_counters_with_suffixes_and_likes_word() {
    let html = r#"
        <div class="resource_content">
            <a class="r-title" href="/project/p/">P</a>
            <div class="r-stats">3M Downloads · 12.5k likes</div>
        </div>
    "#;
    let stats = test_error_stats();
    let map = parse_listing_fragment(html, &base_url(), &stats).expect("should parse");
    assert_eq!(map.downloads, 3_000_000);
    assert_eq!(map.likes, 12_500);
}

#[test]
fn test_counters_singular_and_separators() {
    let html = r#"
        <div class="resource_content">
            <a class="r-title" href="/project/p/">P</a>
            <div class="r-stats">1,204 download 1 diamond</div>
        </div>
    "#;
    let stats = test_error_stats();
    let map = parse_listing_fragment(html, &base_url(), &stats).expect("should parse");
    assert_eq!(map.downloads, 1_204);
    assert_eq!(map.likes, 1);
}

#[test]
fn test_unmatched_counters_stay_zero() {
    let html = r#"
        <div class="resource_content">
            <a class="r-title" href="/project/p/">P</a>
            <div class="r-stats">many views</div>
        </div>
    "#;
    let stats = test_error_stats();
    let map = parse_listing_fragment(html, &base_url(), &stats).expect("should parse");
    assert_eq!(map.downloads, 0);
    assert_eq!(map.likes, 0);
    assert_eq!(stats.get_warning_count(WarningType::MissingStats), 0);
}

#[test]
fn test_lazy_thumbnail_uses_data_src() {
    let html = r#"
        <div class="resource_content">
            <img class="r-preview" src="" data-src="https://static.example.com/lazy.jpg">
            <a class="r-title" href="/project/p/">P</a>
        </div>
    "#;
    let stats = test_error_stats();
    let map = parse_listing_fragment(html, &base_url(), &stats).expect("should parse");
    assert_eq!(map.thumbnail, "https://static.example.com/lazy.jpg");
}

#[test]
fn test_text_whitespace_is_collapsed() {
    let html = r#"
        <div class="resource_content">
            <a class="r-title" href="/project/p/">
                Sky <b>Island</b>
            </a>
            <a class="r-author" href="/member/a/">   someone   </a>
        </div>
    "#;
    let stats = test_error_stats();
    let map = parse_listing_fragment(html, &base_url(), &stats).expect("should parse");
    assert_eq!(map.title, "Sky Island");
    assert_eq!(map.author, "someone");
}

#[test]
fn test_resolve_listing_url_variants() {
    let base = base_url();
    assert_eq!(
        resolve_listing_url(&base, "/project/a/").expect("relative"),
        "https://www.planetminecraft.com/project/a/"
    );
    assert_eq!(
        resolve_listing_url(&base, "https://other.example.com/x").expect("absolute"),
        "https://other.example.com/x"
    );
    assert_eq!(
        resolve_listing_url(&base, "").expect("empty"),
        "https://www.planetminecraft.com/"
    );
}

#[test]
fn test_unresolvable_href_is_an_error() {
    let html = r#"<div class="resource_content"><a class="r-title" href="http://[::1">Bad</a></div>"#;
    let stats = test_error_stats();
    let result = parse_listing_fragment(html, &base_url(), &stats);
    match result {
        Err(err @ ListingError::InvalidUrl { .. }) => {
            assert_eq!(err.error_type(), ErrorType::ListingInvalidUrl)
        }
        other => panic!("expected InvalidUrl, got {other:?}"),
    }
}
