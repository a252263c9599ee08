pub mod cross_modal;
pub mod evolution;
pub mod filter;
pub mod graph;
pub mod provenance;
pub mod reasoning;

pub use cross_modal::{CrossModalHit, CrossModalNote, QueryModality};
pub use evolution::{ClaimEvolution, TimelineEvent, TimelineEventKind, TrustHistoryEvent};
pub use filter::{ClaimFilter, ScoredHit};
pub use graph::{EvolutionGraph, GraphEdge, GraphNode, Relationship};
pub use provenance::ProvenanceReport;
pub use reasoning::{ConfidenceTier, ReasonedHit, ReasoningStep, ReasoningStepKind};
