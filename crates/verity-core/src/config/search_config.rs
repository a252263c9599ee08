use serde::{Deserialize, Serialize};

use super::defaults;

/// Search subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Over-fetch multiplier: the store is asked for `limit * multiplier`
    /// candidates to give the re-ranker headroom.
    pub candidate_multiplier: usize,
    /// Default result count when the caller does not specify one.
    pub default_limit: usize,
    /// Days under which a claim counts as recent.
    pub recent_age_days: i64,
    /// Days over which a claim needs re-verification.
    pub stale_age_days: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            candidate_multiplier: defaults::DEFAULT_CANDIDATE_MULTIPLIER,
            default_limit: defaults::DEFAULT_SEARCH_LIMIT,
            recent_age_days: defaults::DEFAULT_RECENT_AGE_DAYS,
            stale_age_days: defaults::DEFAULT_STALE_AGE_DAYS,
        }
    }
}
