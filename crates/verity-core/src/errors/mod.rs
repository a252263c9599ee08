//! Error taxonomy for the engine.
//!
//! Three caller-distinguishable failure kinds: invalid input (rejected
//! before any external call), unknown claim (fails fast, no partial
//! result), and external dependency failures (propagated unchanged; retry
//! policy belongs to the collaborator or the caller).

pub mod graph_error;
pub mod search_error;

pub use graph_error::GraphError;
pub use search_error::SearchError;

/// Top-level error for all engine operations.
#[derive(Debug, thiserror::Error)]
pub enum VerityError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("claim not found: {claim_id}")]
    UnknownClaim { claim_id: String },

    #[error("external dependency '{dependency}' failed: {reason}")]
    ExternalDependency { dependency: String, reason: String },

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl VerityError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Shorthand for an `UnknownClaim` error.
    pub fn unknown_claim(claim_id: impl Into<String>) -> Self {
        Self::UnknownClaim {
            claim_id: claim_id.into(),
        }
    }

    /// Shorthand for an `ExternalDependency` error.
    pub fn external(dependency: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExternalDependency {
            dependency: dependency.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used across the workspace.
pub type VerityResult<T> = Result<T, VerityError>;
