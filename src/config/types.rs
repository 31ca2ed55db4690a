//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RESULTS, DEFAULT_SNAPSHOT_FILE, DEFAULT_USER_AGENT,
    SEARCH_TIMEOUT_SECS, VALIDATION_DELAY_MS, VALIDATION_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Search configuration, shared by the CLI and the library.
///
/// Parsed from the command line by `clap`, or constructed programmatically
/// with struct update syntax over `Config::default()`.
///
/// # Examples
///
/// ```no_run
/// use map_scraper::Config;
///
/// let config = Config {
///     query: "castle adventure map".to_string(),
///     max_results: 10,
///     ..Default::default()
/// };
/// ```
///
/// ```bash
/// map_scraper "castle adventure map"
/// map_scraper "parkour" 5 --output ./snapshots/parkour.json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "map_scraper",
    about = "Searches a map listing site and saves a validated JSON snapshot."
)]
pub struct Config {
    /// Free-text search query
    #[arg(value_parser)]
    pub query: String,

    /// Maximum number of maps to keep
    #[arg(default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Snapshot path (JSON file, overwritten on every run); defaults to the executable's directory
    #[arg(long, value_parser, default_value_os_t = default_snapshot_path())]
    pub output: PathBuf,

    /// Origin of the listing site; listing links are resolved against it
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Search request timeout in seconds
    #[arg(long, default_value_t = SEARCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Per-link check timeout in seconds
    #[arg(long, default_value_t = VALIDATION_TIMEOUT_SECS)]
    pub validation_timeout_seconds: u64,

    /// Pause between link checks in milliseconds
    #[arg(long, default_value_t = VALIDATION_DELAY_MS)]
    pub validation_delay_ms: u64,

    /// Keep every listing without checking its link
    #[arg(long)]
    pub skip_validation: bool,

    /// Replacement keyword vocabulary (one term per line)
    #[arg(long, value_parser)]
    pub vocabulary: Option<PathBuf>,
}

/// `maps-data.json` in the directory holding the running executable.
///
/// Falls back to the bare file name (the working directory) when the
/// executable path cannot be determined.
pub fn default_snapshot_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_SNAPSHOT_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_FILE))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: default_snapshot_path(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: SEARCH_TIMEOUT_SECS,
            validation_timeout_seconds: VALIDATION_TIMEOUT_SECS,
            validation_delay_ms: VALIDATION_DELAY_MS,
            skip_validation: false,
            vocabulary: None,
        }
    }
}
