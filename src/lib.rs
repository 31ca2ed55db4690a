//! map_scraper library: community map discovery on a listing site
//!
//! This library searches a map listing site for a free-text query, extracts
//! typed records from the listing cards on the first results page, drops
//! duplicates and dead links, and persists the result as a JSON snapshot.
//!
//! # Example
//!
//! ```no_run
//! use map_scraper::{Config, run_search};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     query: "castle adventure map".to_string(),
//!     max_results: 10,
//!     ..Default::default()
//! };
//!
//! let report = run_search(config).await?;
//! println!("Saved {} maps to {}", report.saved, report.snapshot_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
mod dedup;
pub mod error_handling;
pub mod initialization;
mod models;
mod parse;
mod search;
mod snapshot;
mod utils;
mod validate;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dedup::dedup_by_url;
pub use error_handling::ProcessingStats;
pub use models::{MapListing, SearchQuery, Snapshot};
pub use parse::{
    find_non_map_term, parse_count, parse_listing, parse_listing_fragment, resolve_listing_url,
    suffix_multiplier, truncate_description, try_parse_count, Vocabulary, MAGNITUDE_SUFFIXES,
};
pub use run::{run_search, search_maps, SearchReport};
pub use search::{build_search_url, extract_listings, fetch_search_page, search_listings};
pub use snapshot::{read_snapshot, write_snapshot};
pub use validate::{annotate_links, check_link, validate_links, LinkStatus};

// Internal run module (threads the pipeline stage by stage)
mod run {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::{info, warn};
    use url::Url;

    use crate::app::{print_error_statistics, print_run_summary};
    use crate::config::Config;
    use crate::dedup::dedup_by_url;
    use crate::error_handling::{ErrorType, InfoType, InitializationError, ProcessingStats};
    use crate::initialization::{init_search_client, init_validation_client};
    use crate::models::{MapListing, SearchQuery};
    use crate::parse::{find_non_map_term, Vocabulary};
    use crate::search::search_listings;
    use crate::snapshot::write_snapshot;
    use crate::validate::validate_links;

    /// Results of a search run.
    #[derive(Debug, Clone)]
    pub struct SearchReport {
        /// The query as given
        pub query: String,
        /// Genre keywords recognised in the query (diagnostic only)
        pub keywords: Vec<String>,
        /// Listings parsed from the results page
        pub parsed: usize,
        /// Listings left after deduplication and truncation
        pub unique: usize,
        /// Listings dropped by the link check
        pub broken: usize,
        /// Listings written to the snapshot
        pub saved: usize,
        /// The saved listings, in snapshot order
        pub maps: Vec<MapListing>,
        /// Where the snapshot was written
        pub snapshot_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    struct StageCounts {
        parsed: usize,
        unique: usize,
    }

    /// Runs search, deduplication and link validation for `query`.
    ///
    /// Search and per-link failures never surface here: they shrink the
    /// result and are recorded in `stats`. The snapshot is not written; see
    /// [`run_search`] for the full run.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if an HTTP client cannot be built.
    pub async fn search_maps(
        config: &Config,
        query: &SearchQuery,
        stats: &ProcessingStats,
    ) -> Result<Vec<MapListing>, InitializationError> {
        let (maps, _) = run_pipeline(config, query, stats).await?;
        Ok(maps)
    }

    async fn run_pipeline(
        config: &Config,
        query: &SearchQuery,
        stats: &ProcessingStats,
    ) -> Result<(Vec<MapListing>, StageCounts), InitializationError> {
        let search_client = init_search_client(config)?;

        let found = match Url::parse(&config.base_url) {
            Ok(base_url) => search_listings(&search_client, &base_url, query, stats).await,
            Err(e) => {
                warn!("Invalid base URL '{}': {}", config.base_url, e);
                stats.increment_error(ErrorType::HttpRequestBuilderError);
                Vec::new()
            }
        };
        let parsed = found.len();

        let unique_maps = dedup_by_url(found, query.max_results(), stats);
        let unique = unique_maps.len();

        let maps = if config.skip_validation {
            info!("Skipping link validation");
            unique_maps
        } else {
            let validation_client = init_validation_client(config)?;
            validate_links(
                &validation_client,
                unique_maps,
                Duration::from_millis(config.validation_delay_ms),
                stats,
            )
            .await
        };

        Ok((maps, StageCounts { parsed, unique }))
    }

    /// Runs a full search with the provided configuration.
    ///
    /// This is the main entry point for the library: it validates the input,
    /// logs the extracted keywords, runs [`search_maps`] and writes the
    /// snapshot to `config.output`. An empty result still produces a snapshot.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The query is blank or `max_results` is zero
    /// - The vocabulary file cannot be read
    /// - The base URL is not a valid URL
    /// - An HTTP client cannot be built
    /// - The snapshot cannot be written
    pub async fn run_search(config: Config) -> Result<SearchReport> {
        let start_time = Instant::now();

        let query = SearchQuery::new(config.query.as_str(), config.max_results)
            .context("Invalid search input")?;
        Url::parse(&config.base_url)
            .with_context(|| format!("Invalid base URL '{}'", config.base_url))?;

        let vocabulary = match config.vocabulary.as_deref() {
            Some(path) => Vocabulary::from_file(path).context("Failed to load vocabulary")?,
            None => Vocabulary::default(),
        };

        let stats = ProcessingStats::new();

        info!("🔍 Searching for: {}", query.text());
        let keywords = vocabulary.extract_keywords(query.text());
        info!("Keywords: {}", keywords.join(", "));

        if let Some(term) = find_non_map_term(query.text()) {
            warn!(
                "Query mentions '{}'; results are limited to maps and may not match",
                term
            );
            stats.increment_info(InfoType::NonMapQuery);
        }

        let (maps, counts) = run_pipeline(&config, &query, &stats)
            .await
            .context("Failed to initialize HTTP client")?;
        let broken = counts.unique - maps.len();

        let snapshot = write_snapshot(&config.output, query.text(), maps)
            .with_context(|| format!("Failed to write snapshot to {}", config.output.display()))?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_error_statistics(&stats);
        print_run_summary(
            counts.parsed,
            counts.unique,
            broken,
            snapshot.map_count(),
            elapsed_seconds,
        );

        Ok(SearchReport {
            query: snapshot.query().to_string(),
            keywords,
            parsed: counts.parsed,
            unique: counts.unique,
            broken,
            saved: snapshot.map_count(),
            maps: snapshot.into_maps(),
            snapshot_path: config.output,
            elapsed_seconds,
        })
    }
}
