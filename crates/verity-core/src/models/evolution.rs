use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::claim::{Claim, EvidenceEntry, MediaKind, TrustLevel, TrustScore};

/// One point in a claim's trust trajectory.
/// Rebuilt on demand from the evidence trail, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustHistoryEvent {
    pub at: DateTime<Utc>,
    pub score: TrustScore,
    pub level: TrustLevel,
    /// Descriptive label, e.g. "Supporting evidence added".
    pub event: String,
    /// The evidence entry that caused this step, if any.
    pub evidence_id: Option<String>,
}

/// Kind of a merged timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    ClaimFirstSeen,
    EvidenceAdded,
    RelatedClaimFound,
}

/// One entry in the merged chronological timeline of a claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub at: DateTime<Utc>,
    pub kind: TimelineEventKind,
    pub description: String,
    pub media_kind: MediaKind,
    pub source_url: Option<String>,
}

/// Full evolution record for one claim: the claim, what relates to it,
/// its evidence trail, and the computed trust trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimEvolution {
    pub claim_id: String,
    pub original_claim: Claim,
    pub related_claims: Vec<Claim>,
    pub evidence_trail: Vec<EvidenceEntry>,
    pub trust_history: Vec<TrustHistoryEvent>,
}
