//! End-of-run statistics logging.

use std::fmt::Display;

use log::info;

use crate::error_handling::ProcessingStats;

/// Prints error, warning, and info statistics to the log.
///
/// Categories with a zero count are left out; nothing is printed for a clean run.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    print_section(
        "Error",
        error_stats.total_errors(),
        error_stats
            .error_counts()
            .into_iter()
            .map(|(kind, count)| (kind.as_str(), count)),
    );
    print_section(
        "Warning",
        error_stats.total_warnings(),
        error_stats
            .warning_counts()
            .into_iter()
            .map(|(kind, count)| (kind.as_str(), count)),
    );
    print_section(
        "Info",
        error_stats.total_info(),
        error_stats
            .info_counts()
            .into_iter()
            .map(|(kind, count)| (kind.as_str(), count)),
    );
}

fn print_section<L: Display>(
    heading: &str,
    total: usize,
    counts: impl Iterator<Item = (L, usize)>,
) {
    if total == 0 {
        return;
    }
    info!("{} Counts ({} total):", heading, total);
    for (label, count) in counts {
        info!("   {}: {}", label, count);
    }
}

/// Prints a one-line summary of the pipeline counts.
pub fn print_run_summary(
    parsed: usize,
    unique: usize,
    broken: usize,
    saved: usize,
    elapsed_seconds: f64,
) {
    info!(
        "✅ Found {} unique map{} ({} parsed, {} with broken links, {} saved) in {:.1}s",
        unique,
        if unique == 1 { "" } else { "s" },
        parsed,
        broken,
        saved,
        elapsed_seconds
    );
}
