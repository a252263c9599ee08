use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Trust score clamped to [0.0, 1.0].
/// Represents the estimated credibility of a claim.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TrustScore(f64);

impl TrustScore {
    /// Scores at or above this indicate a reliable claim when building
    /// reasoning chains.
    pub const RELIABLE: f64 = 0.7;
    /// Scores at or below this indicate an unreliable claim.
    pub const UNRELIABLE: f64 = 0.3;
    /// The neutral score assigned to claims with no evidence either way.
    pub const NEUTRAL: f64 = 0.5;

    /// Create a new TrustScore, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the score is high enough to call the claim reliable.
    pub fn is_reliable(self) -> bool {
        self.0 >= Self::RELIABLE
    }

    /// Whether the score is low enough to call the claim unreliable.
    pub fn is_unreliable(self) -> bool {
        self.0 <= Self::UNRELIABLE
    }
}

impl Default for TrustScore {
    fn default() -> Self {
        Self(Self::NEUTRAL)
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for TrustScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<TrustScore> for f64 {
    fn from(s: TrustScore) -> Self {
        s.0
    }
}

impl Add for TrustScore {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for TrustScore {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl Mul<f64> for TrustScore {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
