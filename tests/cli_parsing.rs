//! Tests for command-line parsing into `Config`.

use clap::Parser;
use map_scraper::config::default_snapshot_path;
use map_scraper::{Config, LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_query_only_uses_defaults() {
    let config = Config::try_parse_from(["map_scraper", "castle adventure"]).expect("should parse");
    assert_eq!(config.query, "castle adventure");
    assert_eq!(config.max_results, 20);
    assert_eq!(config.output, default_snapshot_path());
    assert_eq!(config.base_url, "https://www.planetminecraft.com");
    assert!(matches!(config.log_level, LogLevel::Info));
    assert!(matches!(config.log_format, LogFormat::Plain));
    assert!(!config.skip_validation);
}

#[test]
fn test_positional_max_results() {
    let config = Config::try_parse_from(["map_scraper", "parkour", "5"]).expect("should parse");
    assert_eq!(config.max_results, 5);
}

#[test]
fn test_missing_query_is_rejected() {
    assert!(Config::try_parse_from(["map_scraper"]).is_err());
}

#[test]
fn test_non_numeric_max_results_is_rejected() {
    assert!(Config::try_parse_from(["map_scraper", "parkour", "many"]).is_err());
    assert!(Config::try_parse_from(["map_scraper", "parkour", "-3"]).is_err());
}

#[test]
fn test_all_flags() {
    let config = Config::try_parse_from([
        "map_scraper",
        "horror",
        "10",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--output",
        "/tmp/out/maps.json",
        "--base-url",
        "http://127.0.0.1:9000",
        "--user-agent",
        "test-agent/1.0",
        "--timeout-seconds",
        "7",
        "--validation-timeout-seconds",
        "3",
        "--validation-delay-ms",
        "0",
        "--skip-validation",
        "--vocabulary",
        "genres.txt",
    ])
    .expect("should parse");

    assert_eq!(config.query, "horror");
    assert_eq!(config.max_results, 10);
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.output, PathBuf::from("/tmp/out/maps.json"));
    assert_eq!(config.base_url, "http://127.0.0.1:9000");
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert_eq!(config.timeout_seconds, 7);
    assert_eq!(config.validation_timeout_seconds, 3);
    assert_eq!(config.validation_delay_ms, 0);
    assert!(config.skip_validation);
    assert_eq!(config.vocabulary, Some(PathBuf::from("genres.txt")));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    assert!(Config::try_parse_from(["map_scraper", "castle", "--log-level", "loud"]).is_err());
}
