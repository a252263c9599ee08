use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::evolution::TimelineEvent;
use crate::claim::Claim;

/// A full provenance report for one claim: current status, assessment,
/// evidence summary, timeline, related claims, and a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvenanceReport {
    pub claim_id: String,
    pub current_status: Claim,
    pub trust_assessment: String,
    pub evidence_summary: String,
    pub timeline: Vec<TimelineEvent>,
    pub related_claims: Vec<Claim>,
    pub recommendation: String,
    pub generated_at: DateTime<Utc>,
}
