//! Provenance report assembly: current status, assessment, evidence
//! summary, timeline, and a recommendation in one record.

use chrono::Utc;
use tracing::info;

use verity_core::claim::{Claim, EvidenceEntry};
use verity_core::models::ProvenanceReport;
use verity_trust::narrative;

use crate::builder::HistoryBuilder;

impl HistoryBuilder {
    /// Assemble a full provenance report for one claim.
    ///
    /// The assessment and recommendation are derived from the claim's
    /// stored trust level; the timeline and evidence summary are computed
    /// fresh from the supplied trails.
    pub fn provenance_report(
        &self,
        claim: Claim,
        evidence_trail: &[EvidenceEntry],
        related_claims: Vec<Claim>,
    ) -> ProvenanceReport {
        let level = self.trust_engine().level_of(claim.trust_score);
        let trust_assessment = narrative::assessment_line(level, claim.trust_score);
        let recommendation = narrative::recommendation(level).to_string();
        let evidence_summary = self.evidence_summary(evidence_trail);
        let timeline = self.timeline(&claim, evidence_trail, &related_claims);

        info!(claim_id = %claim.id, level = %level, "generated provenance report");

        ProvenanceReport {
            claim_id: claim.id.clone(),
            current_status: claim,
            trust_assessment,
            evidence_summary,
            timeline,
            related_claims,
            recommendation,
            generated_at: Utc::now(),
        }
    }
}
