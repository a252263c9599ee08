use serde::{Deserialize, Serialize};

use crate::claim::{Claim, MediaKind, Platform, TrustLevel};

/// Typed search filter — one field per supported dimension, so filter keys
/// are checked at compile time rather than spelled as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimFilter {
    pub media_kind: Option<MediaKind>,
    pub platform: Option<Platform>,
    pub trust_level: Option<TrustLevel>,
    pub min_trust_score: Option<f64>,
    pub max_trust_score: Option<f64>,
}

impl ClaimFilter {
    pub fn is_empty(&self) -> bool {
        self.media_kind.is_none()
            && self.platform.is_none()
            && self.trust_level.is_none()
            && self.min_trust_score.is_none()
            && self.max_trust_score.is_none()
    }

    /// Whether a claim passes every active dimension.
    pub fn matches(&self, claim: &Claim) -> bool {
        if let Some(kind) = self.media_kind {
            if claim.media_kind != kind {
                return false;
            }
        }
        if let Some(platform) = self.platform {
            if claim.platform != platform {
                return false;
            }
        }
        if let Some(level) = self.trust_level {
            if claim.trust_level != level {
                return false;
            }
        }
        if let Some(min) = self.min_trust_score {
            if claim.trust_score.value() < min {
                return false;
            }
        }
        if let Some(max) = self.max_trust_score {
            if claim.trust_score.value() > max {
                return false;
            }
        }
        true
    }
}

/// One ranked result from the external vector store: a claim payload plus
/// the store-computed similarity to the query vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredHit {
    pub claim: Claim,
    pub similarity: f64,
}
