//! Configuration for candidate scoring and ranking.

use serde::{Deserialize, Serialize};
use yieldrank_core::types::Date;

/// Configuration for a ranking run.
///
/// Controls parallelism and the as-of date used for discount accretion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Enable parallel scoring (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum candidate count to trigger parallel scoring.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// As-of date for time-to-maturity. Today when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<Date>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64,
            as_of: None,
        }
    }
}

impl RankingConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always scores sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel scoring.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel scoring.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Pins the as-of date.
    #[must_use]
    pub fn with_as_of(mut self, as_of: Date) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// The pinned as-of date, or today.
    #[must_use]
    pub fn as_of_or_today(&self) -> Date {
        self.as_of.unwrap_or_else(Date::today)
    }

    /// Returns true if parallel scoring should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
