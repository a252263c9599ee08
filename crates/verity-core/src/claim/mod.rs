pub mod base;
pub mod kinds;
pub mod score;

pub use base::{Claim, EvidenceEntry};
pub use kinds::{MediaKind, Platform, TrustLevel};
pub use score::TrustScore;
