use serde::{Deserialize, Serialize};

use crate::claim::Claim;

/// Confidence tier attached to one reasoning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// Weight used when aggregating a chain into a reasoning score.
    pub fn weight(self) -> f64 {
        match self {
            Self::High => 1.0,
            Self::Medium => 0.6,
            Self::Low => 0.3,
        }
    }
}

/// What a reasoning step is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningStepKind {
    SemanticMatch,
    MediaKindFilter,
    PlatformFilter,
    TrustAssessment,
    Verification,
    Temporal,
}

/// One step in the chain explaining why a result matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningStep {
    pub kind: ReasoningStepKind,
    pub explanation: String,
    pub confidence: ConfidenceTier,
}

impl ReasoningStep {
    pub fn new(
        kind: ReasoningStepKind,
        explanation: impl Into<String>,
        confidence: ConfidenceTier,
    ) -> Self {
        Self {
            kind,
            explanation: explanation.into(),
            confidence,
        }
    }
}

/// A search hit annotated with its reasoning chain and aggregate score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasonedHit {
    pub claim: Claim,
    /// Raw similarity from the vector store.
    pub similarity: f64,
    /// Ordered chain justifying the match.
    pub reasoning: Vec<ReasoningStep>,
    /// Mean tier weight over the chain; 0.0 for an empty chain.
    pub reasoning_score: f64,
}

/// Aggregate a chain into its reasoning score.
pub fn reasoning_score(chain: &[ReasoningStep]) -> f64 {
    if chain.is_empty() {
        return 0.0;
    }
    let total: f64 = chain.iter().map(|s| s.confidence.weight()).sum();
    total / chain.len() as f64
}
