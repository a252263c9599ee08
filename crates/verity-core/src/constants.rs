/// Verity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scores at or above this are always classified Verified.
/// Fixed constant of the algorithm, not configuration.
pub const VERIFIED_FLOOR: f64 = 0.85;

/// Scores below this are classified Debunked.
/// Fixed constant of the algorithm, not configuration.
pub const DEBUNKED_CEILING: f64 = 0.20;

/// Neutral score that temporal decay pulls toward.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Hard cap on nodes in a propagation graph.
pub const MAX_GRAPH_NODES: usize = 50;

/// Maximum neighbors fetched per expansion during graph traversal.
pub const MAX_NEIGHBORS_PER_EXPANSION: usize = 5;
