//! Human-formatted counter parsing ("1.2K", "3M", "1,204").
//!
//! Magnitude suffixes live in a single table; adding one (say `T`) is a data
//! change that both `parse_count` and the listing-statistics regexes pick up.

/// Magnitude suffix (lowercase, empty for none) and its multiplier.
pub const MAGNITUDE_SUFFIXES: &[(&str, u64)] = &[
    ("", 1),
    ("k", 1_000),
    ("m", 1_000_000),
    ("b", 1_000_000_000),
];

/// Looks up the multiplier for a suffix, case-insensitively.
pub fn suffix_multiplier(suffix: &str) -> Option<u64> {
    let suffix = suffix.trim().to_ascii_lowercase();
    MAGNITUDE_SUFFIXES
        .iter()
        .find(|(s, _)| *s == suffix)
        .map(|(_, multiplier)| *multiplier)
}

/// Regex character class matching any non-empty suffix, e.g. `[KMB]?`.
///
/// Meant for use inside a case-insensitive pattern.
pub fn suffix_class() -> String {
    let letters: String = MAGNITUDE_SUFFIXES
        .iter()
        .filter(|(s, _)| !s.is_empty())
        .map(|(s, _)| regex::escape(&s.to_ascii_uppercase()))
        .collect();
    format!("[{letters}]?")
}

/// Parses a numeric literal scaled by its magnitude suffix.
///
/// Returns `None` when the literal is not a finite, non-negative number or the
/// suffix is unknown. Thousands separators (`,`) are ignored. The scaled value
/// is truncated toward zero, so `"2.5"` with no suffix is `2`.
pub fn try_parse_count(literal: &str, suffix: &str) -> Option<u64> {
    let multiplier = suffix_multiplier(suffix)?;
    let cleaned: String = literal.trim().chars().filter(|c| *c != ',').collect();
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * multiplier as f64) as u64)
}

/// Like [`try_parse_count`], but an unparseable counter is simply `0`.
pub fn parse_count(literal: &str, suffix: &str) -> u64 {
    try_parse_count(literal, suffix).unwrap_or(0)
}
