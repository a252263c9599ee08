//! Fixed narrative text per trust level, used by provenance reports.

use verity_core::claim::{TrustLevel, TrustScore};

/// Assessment sentence for a trust level.
pub fn assessment_text(level: TrustLevel) -> &'static str {
    match level {
        TrustLevel::Verified => "This claim has been verified by multiple credible sources.",
        TrustLevel::LikelyTrue => "This claim is likely true based on available evidence.",
        TrustLevel::Uncertain => {
            "Insufficient evidence to determine the veracity of this claim."
        }
        TrustLevel::LikelyFalse => "This claim is likely false based on available evidence.",
        TrustLevel::Debunked => "This claim has been debunked by authoritative sources.",
    }
}

/// Reader-facing recommendation for a trust level.
pub fn recommendation(level: TrustLevel) -> &'static str {
    match level {
        TrustLevel::Verified | TrustLevel::LikelyTrue => {
            "This claim appears credible. However, always verify with primary sources."
        }
        TrustLevel::Uncertain => {
            "Exercise caution. More evidence is needed to assess this claim's veracity."
        }
        TrustLevel::LikelyFalse | TrustLevel::Debunked => {
            "This claim is unreliable. Do not share without fact-checking."
        }
    }
}

/// Full assessment line: level, score, and the level's sentence.
pub fn assessment_line(level: TrustLevel, score: TrustScore) -> String {
    format!(
        "Current trust level: {} (score: {:.2}). {}",
        level.display_name(),
        score.value(),
        assessment_text(level)
    )
}
