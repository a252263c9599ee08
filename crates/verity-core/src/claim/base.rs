use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kinds::{MediaKind, Platform, TrustLevel};
use super::score::TrustScore;

/// A claim circulating on some platform. The unit everything else in the
/// engine reasons about.
///
/// Created once on submission; `trust_score` and `trust_level` are mutated
/// repeatedly as evidence or manual updates arrive, never deleted by this
/// engine. Concurrent score updates are not atomically read-modify-written
/// here; they race at the external store with whatever last-write-wins or
/// versioning semantics that store provides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// UUID v4 identifier.
    pub id: String,
    pub media_kind: MediaKind,
    pub platform: Platform,
    pub source_url: Option<String>,
    /// When the claim was first observed.
    pub created_at: DateTime<Utc>,
    /// Last time the trust score was recomputed.
    pub last_updated: DateTime<Utc>,
    pub trust_score: TrustScore,
    /// Derived from `trust_score`; callers keep the two in sync.
    pub trust_level: TrustLevel,
    pub verification_count: u64,
    pub supporting_evidence_count: u64,
    pub refuting_evidence_count: u64,
    pub tags: Vec<String>,
    /// Original text for text claims.
    pub text: Option<String>,
    /// Transcription for audio/video claims.
    pub transcription: Option<String>,
}

impl Claim {
    /// Minimal claim with neutral trust, used as a starting point.
    pub fn new(id: impl Into<String>, media_kind: MediaKind, platform: Platform) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            media_kind,
            platform,
            source_url: None,
            created_at: now,
            last_updated: now,
            trust_score: TrustScore::default(),
            trust_level: TrustLevel::Uncertain,
            verification_count: 0,
            supporting_evidence_count: 0,
            refuting_evidence_count: 0,
            tags: Vec::new(),
            text: None,
            transcription: None,
        }
    }

    /// Age of the claim in whole days at `now`.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }
}

/// A piece of evidence supporting or refuting a claim.
/// Immutable once created; ordered by `recorded_at` for decay weighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceEntry {
    /// UUID v4 identifier.
    pub id: String,
    /// The claim this evidence belongs to.
    pub claim_id: String,
    pub media_kind: MediaKind,
    pub content: String,
    pub source_url: Option<String>,
    pub recorded_at: DateTime<Utc>,
    /// True if the evidence supports the claim, false if it refutes it.
    pub supporting: bool,
    /// Credibility of the evidence itself.
    pub credibility: TrustScore,
}

impl EvidenceEntry {
    /// Source for display purposes, falling back to "unknown source".
    pub fn source_or_unknown(&self) -> &str {
        self.source_url.as_deref().unwrap_or("unknown source")
    }
}
