/// Propagation-graph subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("traversal aborted: {reason}")]
    TraversalAborted { reason: String },

    #[error("neighbor fetch failed for claim {claim_id}: {reason}")]
    NeighborFetchFailed { claim_id: String, reason: String },
}
