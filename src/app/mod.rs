//! End-of-run reporting used by the search entry point.

pub mod statistics;

pub use statistics::{print_error_statistics, print_run_summary};
