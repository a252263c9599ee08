//! # verity-core
//!
//! Foundation crate for the Verity claim-credibility engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod claim;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use claim::{Claim, EvidenceEntry, MediaKind, Platform, TrustLevel, TrustScore};
pub use config::VerityConfig;
pub use errors::{VerityError, VerityResult};
