//! # verity-search
//!
//! Reasoning-augmented search over the external vector store: every hit
//! carries a human-auditable chain explaining why it matched, and results
//! are re-ranked by the aggregate confidence of those chains.

pub mod cross_modal;
pub mod engine;
pub mod reasoning;

pub use engine::SearchEngine;
