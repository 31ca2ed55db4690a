//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (source site layout, timeouts, field defaults)
//! - Keyword vocabularies
//! - CLI option types and parsing

mod constants;
mod types;
pub mod vocabulary;

// Re-export all constants
pub use constants::*;
pub use types::{default_snapshot_path, Config, LogFormat, LogLevel};
