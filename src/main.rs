//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `map_scraper` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use map_scraper::initialization::init_logger_with;
use map_scraper::{run_search, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_search(config).await {
        Ok(report) => {
            println!(
                "✅ Found {} map{} for '{}' in {:.1}s",
                report.saved,
                if report.saved == 1 { "" } else { "s" },
                report.query,
                report.elapsed_seconds
            );
            for map in &report.maps {
                println!(
                    "  - {} by {} ({} downloads, {} likes) {}",
                    map.title, map.author, map.downloads, map.likes, map.url
                );
            }
            println!("Results saved in {}", report.snapshot_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("map_scraper error: {:#}", e);
            process::exit(1);
        }
    }
}
