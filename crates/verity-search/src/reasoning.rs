//! Reasoning chain construction for one candidate hit.

use chrono::{DateTime, Utc};

use verity_core::config::SearchConfig;
use verity_core::models::{
    ClaimFilter, ConfidenceTier, ReasoningStep, ReasoningStepKind, ScoredHit,
};

/// Build the reasoning chain for one candidate against the active filters.
///
/// Steps, in order: semantic match (always), one step per active filter,
/// trust assessment (only outside the 0.3–0.7 band), verification (only
/// when verified at least once), temporal (only when notably recent or
/// notably stale).
pub fn build_chain(
    hit: &ScoredHit,
    filter: &ClaimFilter,
    config: &SearchConfig,
    now: DateTime<Utc>,
) -> Vec<ReasoningStep> {
    let mut chain = Vec::new();

    // Semantic similarity, tiered by the raw store score.
    let similarity = hit.similarity;
    let (quality, tier) = if similarity > 0.8 {
        ("Very high", ConfidenceTier::High)
    } else if similarity > 0.6 {
        ("Good", ConfidenceTier::Medium)
    } else {
        ("Moderate", ConfidenceTier::Low)
    };
    chain.push(ReasoningStep::new(
        ReasoningStepKind::SemanticMatch,
        format!("{quality} semantic similarity ({similarity:.3}) to query"),
        tier,
    ));

    if let Some(kind) = filter.media_kind {
        chain.push(ReasoningStep::new(
            ReasoningStepKind::MediaKindFilter,
            format!("Matches required media type: {kind}"),
            ConfidenceTier::High,
        ));
    }

    if let Some(platform) = filter.platform {
        chain.push(ReasoningStep::new(
            ReasoningStepKind::PlatformFilter,
            format!("Matches required platform: {platform}"),
            ConfidenceTier::High,
        ));
    }

    // Trust only speaks when it has something definite to say.
    let trust = hit.claim.trust_score;
    if trust.is_reliable() {
        chain.push(ReasoningStep::new(
            ReasoningStepKind::TrustAssessment,
            format!(
                "High trust score ({:.2}) indicates reliability",
                trust.value()
            ),
            ConfidenceTier::High,
        ));
    } else if trust.is_unreliable() {
        chain.push(ReasoningStep::new(
            ReasoningStepKind::TrustAssessment,
            format!(
                "Low trust score ({:.2}) indicates unreliability",
                trust.value()
            ),
            ConfidenceTier::High,
        ));
    }

    let verifications = hit.claim.verification_count;
    if verifications > 0 {
        chain.push(ReasoningStep::new(
            ReasoningStepKind::Verification,
            format!("Claim has been verified {verifications} time(s)"),
            ConfidenceTier::Medium,
        ));
    }

    let age_days = hit.claim.age_days(now);
    if age_days < config.recent_age_days {
        chain.push(ReasoningStep::new(
            ReasoningStepKind::Temporal,
            format!("Recent claim ({age_days} days old)"),
            ConfidenceTier::Medium,
        ));
    } else if age_days > config.stale_age_days {
        chain.push(ReasoningStep::new(
            ReasoningStepKind::Temporal,
            format!("Older claim ({age_days} days old) - may need re-verification"),
            ConfidenceTier::Low,
        ));
    }

    chain
}
