use serde::{Deserialize, Serialize};

use super::defaults;

/// Trust scoring configuration.
///
/// Only the Likely True / Uncertain boundaries are configurable; the 0.85
/// Verified floor and 0.20 Debunked ceiling are fixed constants of the
/// algorithm (see `constants`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    /// Score at or above which a claim is Likely True.
    pub high_threshold: f64,
    /// Score at or above which a claim is Uncertain.
    pub medium_threshold: f64,
    /// Rank-based weight applied to successively older evidence.
    pub evidence_decay_factor: f64,
    /// Daily rate at which stale scores drift toward neutral.
    pub temporal_decay_rate: f64,
    /// Inertia of the current score when blending in new evidence.
    pub momentum: f64,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            high_threshold: defaults::DEFAULT_TRUST_HIGH_THRESHOLD,
            medium_threshold: defaults::DEFAULT_TRUST_MEDIUM_THRESHOLD,
            evidence_decay_factor: defaults::DEFAULT_EVIDENCE_DECAY_FACTOR,
            temporal_decay_rate: defaults::DEFAULT_TEMPORAL_DECAY_RATE,
            momentum: defaults::DEFAULT_SCORE_MOMENTUM,
        }
    }
}
