use crate::errors::VerityResult;
use crate::models::{ClaimFilter, ScoredHit};
use crate::Claim;

/// External vector similarity store.
///
/// All nearest-neighbor math and all persistent claim state live behind
/// this trait; the engine consumes already-ranked candidate lists and
/// already-computed similarity scores, never vectors themselves. Failures
/// surface as `ExternalDependency` and propagate to the caller untouched.
pub trait IVectorStore: Send + Sync {
    /// Ranked nearest-neighbor search over stored claims, honoring every
    /// active dimension of the filter.
    fn search(
        &self,
        vector: &[f32],
        limit: usize,
        filter: &ClaimFilter,
    ) -> VerityResult<Vec<ScoredHit>>;

    /// Fetch one claim by id, or `None` if absent.
    fn get(&self, id: &str) -> VerityResult<Option<Claim>>;

    /// Ranked claims most similar to the given stored claim, excluding
    /// the claim itself.
    fn related(&self, id: &str, limit: usize) -> VerityResult<Vec<ScoredHit>>;
}
