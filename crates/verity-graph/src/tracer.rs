//! Bounded BFS over the store's related-claims relation.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, info};

use verity_core::config::GraphConfig;
use verity_core::errors::{VerityError, VerityResult};
use verity_core::models::{EvolutionGraph, GraphEdge, GraphNode, Relationship};
use verity_core::traits::IVectorStore;

/// Traces claim propagation graphs. Borrows the store; holds only
/// immutable configuration between calls.
pub struct GraphTracer<'a> {
    store: &'a dyn IVectorStore,
    config: GraphConfig,
}

impl<'a> GraphTracer<'a> {
    pub fn new(store: &'a dyn IVectorStore) -> Self {
        Self {
            store,
            config: GraphConfig::default(),
        }
    }

    pub fn with_config(store: &'a dyn IVectorStore, config: GraphConfig) -> Self {
        Self { store, config }
    }

    /// Trace the propagation graph reachable from a root claim.
    ///
    /// Fails with `UnknownClaim` before traversing if the root is absent;
    /// no partial graph is ever returned for a missing root. Breadth-first
    /// from the root, bounded three ways: at most `neighbor_limit` (≤5)
    /// neighbors per expansion, at most `node_cap` (≤50) nodes total, and
    /// no expansion at or beyond `max_hops`. The bounds guarantee
    /// termination even when the store's neighbor relation is cyclic.
    ///
    /// Because the node cap can truncate mid-traversal, which branches get
    /// expanded depends on frontier insertion order; callers must not
    /// assume completeness beyond the cap.
    pub fn trace_evolution(&self, root_id: &str, max_hops: usize) -> VerityResult<EvolutionGraph> {
        if self.store.get(root_id)?.is_none() {
            return Err(VerityError::unknown_claim(root_id));
        }

        let node_cap = self.config.effective_node_cap();
        let neighbor_limit = self.config.effective_neighbor_limit();

        let mut graph = EvolutionGraph::new(root_id);
        let mut visited: HashSet<String> = HashSet::new();
        let mut frontier: VecDeque<(String, usize)> = VecDeque::new();
        frontier.push_back((root_id.to_string(), 0));

        while let Some((id, hop)) = frontier.pop_front() {
            if graph.nodes.len() >= node_cap {
                debug!(cap = node_cap, "node cap reached, traversal truncated");
                break;
            }
            if visited.contains(&id) {
                continue;
            }
            visited.insert(id.clone());

            let claim = match self.store.get(&id)? {
                Some(c) => c,
                // Neighbor vanished between listing and fetch; skip it.
                None => continue,
            };

            graph.nodes.push(GraphNode {
                id: id.clone(),
                claim: claim.clone(),
                hops: hop,
            });

            // Nodes at the hop limit are recorded but never expanded.
            if hop >= max_hops {
                continue;
            }

            let related = self.store.related(&id, neighbor_limit)?;
            for neighbor in related {
                graph.edges.push(GraphEdge {
                    from: id.clone(),
                    to: neighbor.claim.id.clone(),
                    similarity: neighbor.similarity,
                    relationship: Relationship::classify(&claim, &neighbor.claim),
                });

                if !visited.contains(&neighbor.claim.id) {
                    frontier.push_back((neighbor.claim.id, hop + 1));
                }
            }
        }

        info!(
            root = root_id,
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            max_hops,
            "evolution trace complete"
        );
        Ok(graph)
    }

    /// Trace with the configured default hop limit.
    pub fn trace_default(&self, root_id: &str) -> VerityResult<EvolutionGraph> {
        self.trace_evolution(root_id, self.config.default_max_hops)
    }
}
