//! The scoring formulas. Free functions over plain inputs; the engine
//! wraps them with configuration.

use chrono::{DateTime, Utc};

use verity_core::claim::{EvidenceEntry, TrustScore};
use verity_core::constants::NEUTRAL_SCORE;

/// Relative weight of source credibility in the initial score.
const SOURCE_WEIGHT: f64 = 0.6;
/// Relative weight of platform reliability in the initial score.
const PLATFORM_WEIGHT: f64 = 0.4;

/// Per-source boost for independent verifications, capped at 0.15.
const VERIFICATION_BOOST_STEP: f64 = 0.05;
const VERIFICATION_BOOST_CAP: f64 = 0.15;
/// Per-source boost for official sources, capped at 0.15.
const OFFICIAL_BOOST_STEP: f64 = 0.075;
const OFFICIAL_BOOST_CAP: f64 = 0.15;
/// Total boost cap.
const BOOST_CAP: f64 = 0.3;

/// Initial trust score for a new claim: weighted average of source
/// credibility and platform reliability, clamped to [0, 1].
pub fn initial_score(source_credibility: f64, platform_reliability: f64) -> TrustScore {
    TrustScore::new(source_credibility * SOURCE_WEIGHT + platform_reliability * PLATFORM_WEIGHT)
}

/// Update a trust score from accumulated evidence.
///
/// Evidence is sorted newest-first and each entry's weight decays by its
/// rank: `decay_factor^rank`. The decay is rank-based, not elapsed-time
/// based — two entries a year apart weigh the same as two entries an hour
/// apart. Impacts are summed per side, turned into a support ratio
/// (0.5 when both sides are zero), and blended into the current score
/// with momentum. Empty evidence is a no-op.
pub fn update_with_evidence(
    current: TrustScore,
    evidence: &[EvidenceEntry],
    decay_factor: f64,
    momentum: f64,
) -> TrustScore {
    if evidence.is_empty() {
        return current;
    }

    let mut sorted: Vec<&EvidenceEntry> = evidence.iter().collect();
    sorted.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

    let mut supporting = 0.0_f64;
    let mut refuting = 0.0_f64;
    for (rank, entry) in sorted.iter().enumerate() {
        let weight = decay_factor.powi(rank as i32);
        let impact = entry.credibility.value() * weight;
        if entry.supporting {
            supporting += impact;
        } else {
            refuting += impact;
        }
    }

    let total = supporting + refuting;
    let support_ratio = if total > 0.0 {
        supporting / total
    } else {
        NEUTRAL_SCORE
    };

    TrustScore::new(current.value() * momentum + support_ratio * (1.0 - momentum))
}

/// Pull a stale score toward neutral 0.5 by `(1 - rate)^days`.
///
/// Whole days only; `now == last_updated` (or anything under a day) is a
/// no-op. Monotonic: more days moves the score strictly closer to 0.5,
/// never past it.
pub fn temporal_decay(
    current: TrustScore,
    last_updated: DateTime<Utc>,
    decay_rate: f64,
    now: DateTime<Utc>,
) -> TrustScore {
    let days = (now - last_updated).num_days();
    if days <= 0 {
        return current;
    }

    let factor = (1.0 - decay_rate).powi(days as i32);
    TrustScore::new(NEUTRAL_SCORE + (current.value() - NEUTRAL_SCORE) * factor)
}

/// Credibility boost from verification and official sources, capped at 0.3.
/// Callers add this to a score and re-clamp.
pub fn credibility_boost(verification_sources: &[String], official_sources: &[String]) -> f64 {
    let verification =
        (verification_sources.len() as f64 * VERIFICATION_BOOST_STEP).min(VERIFICATION_BOOST_CAP);
    let official = (official_sources.len() as f64 * OFFICIAL_BOOST_STEP).min(OFFICIAL_BOOST_CAP);
    (verification + official).min(BOOST_CAP)
}
