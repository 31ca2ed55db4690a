//! Processing statistics tracking.
//!
//! Counts errors, warnings, and informational events during a search run.
//! Every stage records through a shared `&ProcessingStats`.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// One zero-initialized atomic counter per variant of a categorization enum.
struct CounterSet<K> {
    counters: HashMap<K, AtomicUsize>,
}

impl<K> CounterSet<K>
where
    K: IntoEnumIterator + Copy + Eq + Hash + Debug,
{
    fn new() -> Self {
        Self {
            counters: K::iter().map(|key| (key, AtomicUsize::new(0))).collect(),
        }
    }

    fn increment(&self, key: K) {
        match self.counters.get(&key) {
            Some(counter) => {
                counter.fetch_add(1, Ordering::Relaxed);
            }
            // Unreachable while every variant is seeded in `new`
            None => log::error!("No statistics counter for {:?}", key),
        }
    }

    fn get(&self, key: K) -> usize {
        self.counters
            .get(&key)
            .map_or(0, |counter| counter.load(Ordering::SeqCst))
    }

    fn total(&self) -> usize {
        K::iter().map(|key| self.get(key)).sum()
    }

    /// Non-zero counts in variant declaration order.
    fn non_zero(&self) -> Vec<(K, usize)> {
        K::iter()
            .map(|key| (key, self.get(key)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// Processing statistics tracker.
///
/// # Categories
///
/// - **Errors**: Failures that drop data (search page, listing)
/// - **Warnings**: Missing optional listing fields replaced by defaults
/// - **Info**: Notable events (truncations, duplicates, broken links, retries)
pub struct ProcessingStats {
    errors: CounterSet<ErrorType>,
    warnings: CounterSet<WarningType>,
    info: CounterSet<InfoType>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: CounterSet::new(),
            warnings: CounterSet::new(),
            info: CounterSet::new(),
        }
    }

    pub fn increment_error(&self, error: ErrorType) {
        self.errors.increment(error);
    }

    pub fn increment_warning(&self, warning: WarningType) {
        self.warnings.increment(warning);
    }

    pub fn increment_info(&self, info_type: InfoType) {
        self.info.increment(info_type);
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(error)
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(warning)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info.get(info_type)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        self.errors.total()
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        self.warnings.total()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        self.info.total()
    }

    /// Error types seen at least once, with their counts.
    pub fn error_counts(&self) -> Vec<(ErrorType, usize)> {
        self.errors.non_zero()
    }

    /// Warning types seen at least once, with their counts.
    pub fn warning_counts(&self) -> Vec<(WarningType, usize)> {
        self.warnings.non_zero()
    }

    /// Info types seen at least once, with their counts.
    pub fn info_counts(&self) -> Vec<(InfoType, usize)> {
        self.info.non_zero()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
