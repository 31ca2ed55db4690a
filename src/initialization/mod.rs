//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - The logger
//! - The search HTTP client
//! - The link validation HTTP client
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::{init_search_client, init_validation_client};
pub use logger::init_logger_with;
