//! Default values for all configuration sections.

/// Score at or above which a claim is Likely True.
pub const DEFAULT_TRUST_HIGH_THRESHOLD: f64 = 0.70;
/// Score at or above which a claim is Uncertain.
pub const DEFAULT_TRUST_MEDIUM_THRESHOLD: f64 = 0.40;
/// Rank-based weight applied to successively older evidence.
pub const DEFAULT_EVIDENCE_DECAY_FACTOR: f64 = 0.95;
/// Daily rate at which stale scores drift toward neutral.
pub const DEFAULT_TEMPORAL_DECAY_RATE: f64 = 0.01;
/// Inertia of the current score when blending in new evidence.
pub const DEFAULT_SCORE_MOMENTUM: f64 = 0.3;

/// Over-fetch multiplier for re-ranking headroom.
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 2;
/// Default result count when the caller does not specify one.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
/// Days under which a claim counts as recent in reasoning chains.
pub const DEFAULT_RECENT_AGE_DAYS: i64 = 7;
/// Days over which a claim needs re-verification in reasoning chains.
pub const DEFAULT_STALE_AGE_DAYS: i64 = 180;

/// Default hop limit for propagation tracing.
pub const DEFAULT_MAX_HOPS: usize = 3;
