use std::fmt::Write as _;

use tracing::debug;

use verity_core::claim::{Claim, EvidenceEntry, TrustLevel};
use verity_core::models::{
    ClaimEvolution, TimelineEvent, TimelineEventKind, TrustHistoryEvent,
};
use verity_trust::TrustEngine;

/// Builds trust trajectories, evidence summaries, and timelines for one
/// claim at a time. Owns a TrustEngine; no other state.
pub struct HistoryBuilder {
    trust: TrustEngine,
}

impl HistoryBuilder {
    pub fn new() -> Self {
        Self {
            trust: TrustEngine::new(),
        }
    }

    pub fn with_engine(trust: TrustEngine) -> Self {
        Self { trust }
    }

    pub fn trust_engine(&self) -> &TrustEngine {
        &self.trust
    }

    /// Aggregate a claim, its related claims, and its evidence trail into
    /// one evolution record with a computed trust trajectory.
    pub fn build_evolution(
        &self,
        original_claim: Claim,
        related_claims: Vec<Claim>,
        evidence_trail: Vec<EvidenceEntry>,
    ) -> ClaimEvolution {
        let trust_history = self.build_trust_history(&original_claim, &evidence_trail);
        debug!(
            claim_id = %original_claim.id,
            history_events = trust_history.len(),
            related = related_claims.len(),
            "built claim evolution"
        );
        ClaimEvolution {
            claim_id: original_claim.id.clone(),
            original_claim,
            related_claims,
            evidence_trail,
            trust_history,
        }
    }

    /// Chronological trust trajectory for a claim.
    ///
    /// Seeds with one event at the claim's creation using the default
    /// initial score, then replays evidence ascending by timestamp. Each
    /// step updates a running score against that single evidence entry
    /// only, not the cumulative set, so the trajectory shows the marginal
    /// effect of each observation.
    pub fn build_trust_history(
        &self,
        claim: &Claim,
        evidence_trail: &[EvidenceEntry],
    ) -> Vec<TrustHistoryEvent> {
        let mut history = Vec::with_capacity(evidence_trail.len() + 1);

        history.push(TrustHistoryEvent {
            at: claim.created_at,
            score: self.trust.default_initial_score(),
            level: TrustLevel::Uncertain,
            event: "Claim first observed".to_string(),
            evidence_id: None,
        });

        let mut sorted: Vec<&EvidenceEntry> = evidence_trail.iter().collect();
        sorted.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));

        let mut running = claim.trust_score;
        for entry in sorted {
            running = self
                .trust
                .update_with_evidence(running, std::slice::from_ref(entry));
            let event = if entry.supporting {
                "Supporting evidence added"
            } else {
                "Refuting evidence added"
            };
            history.push(TrustHistoryEvent {
                at: entry.recorded_at,
                score: running,
                level: self.trust.level_of(running),
                event: event.to_string(),
                evidence_id: Some(entry.id.clone()),
            });
        }

        history
    }

    /// Human-readable evidence summary: counts plus up to three supporting
    /// and three refuting sources.
    pub fn evidence_summary(&self, evidence_trail: &[EvidenceEntry]) -> String {
        if evidence_trail.is_empty() {
            return "No evidence available for this claim.".to_string();
        }

        let supporting: Vec<&EvidenceEntry> =
            evidence_trail.iter().filter(|e| e.supporting).collect();
        let refuting: Vec<&EvidenceEntry> =
            evidence_trail.iter().filter(|e| !e.supporting).collect();

        let mut summary = String::from("Evidence Summary:\n");
        let _ = writeln!(summary, "- Total pieces of evidence: {}", evidence_trail.len());
        let _ = writeln!(summary, "- Supporting evidence: {}", supporting.len());
        let _ = writeln!(summary, "- Refuting evidence: {}", refuting.len());

        if !supporting.is_empty() {
            summary.push_str("\nKey supporting sources:\n");
            for entry in supporting.iter().take(3) {
                let _ = writeln!(
                    summary,
                    "  - {} from {} (credibility: {:.2})",
                    entry.media_kind,
                    entry.source_or_unknown(),
                    entry.credibility.value()
                );
            }
        }

        if !refuting.is_empty() {
            summary.push_str("\nKey refuting sources:\n");
            for entry in refuting.iter().take(3) {
                let _ = writeln!(
                    summary,
                    "  - {} from {} (credibility: {:.2})",
                    entry.media_kind,
                    entry.source_or_unknown(),
                    entry.credibility.value()
                );
            }
        }

        summary
    }

    /// Merged chronological timeline: claim first seen, evidence entries,
    /// and related-claim discoveries, stable-sorted by timestamp.
    pub fn timeline(
        &self,
        claim: &Claim,
        evidence_trail: &[EvidenceEntry],
        related_claims: &[Claim],
    ) -> Vec<TimelineEvent> {
        let mut timeline = Vec::with_capacity(1 + evidence_trail.len() + related_claims.len());

        timeline.push(TimelineEvent {
            at: claim.created_at,
            kind: TimelineEventKind::ClaimFirstSeen,
            description: format!("Claim first appeared on {}", claim.platform),
            media_kind: claim.media_kind,
            source_url: claim.source_url.clone(),
        });

        let mut sorted: Vec<&EvidenceEntry> = evidence_trail.iter().collect();
        sorted.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
        for entry in sorted {
            let side = if entry.supporting { "Supporting" } else { "Refuting" };
            timeline.push(TimelineEvent {
                at: entry.recorded_at,
                kind: TimelineEventKind::EvidenceAdded,
                description: format!("{side} evidence found"),
                media_kind: entry.media_kind,
                source_url: entry.source_url.clone(),
            });
        }

        for related in related_claims {
            timeline.push(TimelineEvent {
                at: related.created_at,
                kind: TimelineEventKind::RelatedClaimFound,
                description: format!("Similar claim found on {}", related.platform),
                media_kind: related.media_kind,
                source_url: related.source_url.clone(),
            });
        }

        // Stable: ties keep merge order (claim, evidence, related).
        timeline.sort_by_key(|e| e.at);
        timeline
    }
}

impl Default for HistoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
