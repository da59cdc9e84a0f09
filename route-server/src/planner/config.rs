//! Search configuration for the route planner.

use std::time::Duration;

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of routes to expand before giving up.
    /// Each expansion is one edge-source query.
    pub max_expansions: usize,

    /// Wall-clock budget for a single search (milliseconds).
    pub timeout_ms: u64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_expansions: usize, timeout_ms: u64) -> Self {
        Self {
            max_expansions,
            timeout_ms,
        }
    }

    /// Returns the search timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: 10_000,
            timeout_ms: 30_000, // 30 seconds
        }
    }
}
