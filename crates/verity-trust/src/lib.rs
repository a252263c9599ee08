//! # verity-trust
//!
//! Pure scoring math for claim credibility: initial score, evidence-weighted
//! update, temporal decay, level classification, and credibility boosts.
//! No I/O, no external dependencies beyond configuration.

pub mod engine;
pub mod formula;
pub mod narrative;

pub use engine::TrustEngine;
