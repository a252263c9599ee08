use chrono::{DateTime, Utc};

use verity_core::claim::{EvidenceEntry, TrustLevel, TrustScore};
use verity_core::config::TrustConfig;
use verity_core::constants::{DEBUNKED_CEILING, VERIFIED_FLOOR};

use crate::formula;

/// Trust scoring engine. Holds only immutable configuration, so one
/// instance is safe for unlimited concurrent reads.
pub struct TrustEngine {
    config: TrustConfig,
}

impl TrustEngine {
    /// Create a new TrustEngine with default thresholds.
    pub fn new() -> Self {
        Self {
            config: TrustConfig::default(),
        }
    }

    /// Create with custom thresholds.
    pub fn with_config(config: TrustConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrustConfig {
        &self.config
    }

    /// Initial trust score for a new claim (0.6 source / 0.4 platform).
    pub fn initial_score(&self, source_credibility: f64, platform_reliability: f64) -> TrustScore {
        formula::initial_score(source_credibility, platform_reliability)
    }

    /// Initial score with neutral source and platform inputs.
    pub fn default_initial_score(&self) -> TrustScore {
        formula::initial_score(0.5, 0.5)
    }

    /// Classify a score into its trust level.
    ///
    /// Bands are evaluated high to low. The 0.85 Verified floor and 0.20
    /// Debunked ceiling are fixed; the two middle boundaries come from
    /// configuration.
    pub fn level_of(&self, score: TrustScore) -> TrustLevel {
        let s = score.value();
        if s >= VERIFIED_FLOOR {
            TrustLevel::Verified
        } else if s >= self.config.high_threshold {
            TrustLevel::LikelyTrue
        } else if s >= self.config.medium_threshold {
            TrustLevel::Uncertain
        } else if s >= DEBUNKED_CEILING {
            TrustLevel::LikelyFalse
        } else {
            TrustLevel::Debunked
        }
    }

    /// Update a score from accumulated evidence (rank-based decay,
    /// momentum blend). Empty evidence returns the score unchanged.
    pub fn update_with_evidence(
        &self,
        current: TrustScore,
        evidence: &[EvidenceEntry],
    ) -> TrustScore {
        formula::update_with_evidence(
            current,
            evidence,
            self.config.evidence_decay_factor,
            self.config.momentum,
        )
    }

    /// Decay a stale score toward neutral by whole days since last update.
    pub fn temporal_decay(
        &self,
        current: TrustScore,
        last_updated: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> TrustScore {
        formula::temporal_decay(current, last_updated, self.config.temporal_decay_rate, now)
    }

    /// Boost from verification and official sources, capped at 0.3.
    /// The caller applies it and re-clamps (TrustScore clamps on
    /// construction).
    pub fn credibility_boost(
        &self,
        verification_sources: &[String],
        official_sources: &[String],
    ) -> f64 {
        formula::credibility_boost(verification_sources, official_sources)
    }
}

impl Default for TrustEngine {
    fn default() -> Self {
        Self::new()
    }
}
