//! Shared helpers.
//!
//! Currently only CSS selector construction for the listing parser.

mod selector;

pub use selector::parse_selector_with_fallback;
