// Shared test helpers: mock search pages and test configuration.

use std::path::Path;

use httptest::Server;
use map_scraper::{Config, LogFormat, LogLevel};

/// A listing card with every field present.
#[allow(dead_code)]
pub fn full_card(slug: &str, title: &str) -> String {
    format!(
        r#"<div class="resource_content">
            <img class="r-preview" src="https://static.example.com/{slug}.jpg">
            <a class="r-title" href="/project/{slug}/">{title}</a>
            <a class="r-author" href="/member/builder/">builder</a>
            <div class="r-stats"><span>1.2K downloads</span> <span>340 diamonds</span></div>
            <div class="r-description">A map called {title}.</div>
            <div class="r-type">Adventure Map</div>
            <span class="r-version">1.20.4</span>
        </div>"#
    )
}

/// A listing card with only a title link.
#[allow(dead_code)]
pub fn bare_card(slug: &str, title: &str) -> String {
    format!(
        r#"<div class="resource_content">
            <a class="r-title" href="/project/{slug}/">{title}</a>
            <div class="r-stats">12 downloads</div>
        </div>"#
    )
}

/// A listing card without a title link.
#[allow(dead_code)]
pub fn untitled_card() -> String {
    r#"<div class="resource_content">
        <a class="r-author" href="/member/ghost/">ghost</a>
        <div class="r-description">No title here</div>
    </div>"#
        .to_string()
}

/// Wraps cards into a search results page.
#[allow(dead_code)]
pub fn results_page(cards: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Projects</title></head>\
         <body><div class=\"content\">{}</div></body></html>",
        cards.concat()
    )
}

/// Test configuration pointed at the mock server, writing into `dir`.
#[allow(dead_code)]
pub fn test_config(server: &Server, query: &str, dir: &Path) -> Config {
    Config {
        query: query.to_string(),
        max_results: 20,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        output: dir.join("maps-data.json"),
        base_url: format!("http://{}", server.addr()),
        user_agent: "map_scraper_test/1.0".to_string(),
        timeout_seconds: 5,
        validation_timeout_seconds: 5,
        validation_delay_ms: 0,
        ..Default::default()
    }
}
