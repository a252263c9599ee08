use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Propagation-graph traversal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Default hop limit when the caller does not specify one.
    pub default_max_hops: usize,
    /// Neighbors fetched per expansion. Never above
    /// `constants::MAX_NEIGHBORS_PER_EXPANSION`.
    pub neighbor_limit: usize,
    /// Total node cap. Never above `constants::MAX_GRAPH_NODES`.
    pub node_cap: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_max_hops: defaults::DEFAULT_MAX_HOPS,
            neighbor_limit: constants::MAX_NEIGHBORS_PER_EXPANSION,
            node_cap: constants::MAX_GRAPH_NODES,
        }
    }
}

impl GraphConfig {
    /// Neighbor limit clamped to the hard cap.
    pub fn effective_neighbor_limit(&self) -> usize {
        self.neighbor_limit.min(constants::MAX_NEIGHBORS_PER_EXPANSION)
    }

    /// Node cap clamped to the hard cap.
    pub fn effective_node_cap(&self) -> usize {
        self.node_cap.min(constants::MAX_GRAPH_NODES)
    }
}
