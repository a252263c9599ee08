use serde::{Deserialize, Serialize};
use std::fmt;

use crate::claim::{Claim, MediaKind};

/// How two directly related claims relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Relationship {
    /// Same media kind, same platform.
    DuplicateSamePlatform,
    /// Same media kind, different platform.
    CrossPlatformDuplicate,
    /// The claim changed media kind between the two.
    MediaTransformation { from: MediaKind, to: MediaKind },
}

impl Relationship {
    /// Classify the edge A → B from the two claims' media kind and platform.
    pub fn classify(a: &Claim, b: &Claim) -> Self {
        if a.media_kind == b.media_kind {
            if a.platform == b.platform {
                Self::DuplicateSamePlatform
            } else {
                Self::CrossPlatformDuplicate
            }
        } else {
            Self::MediaTransformation {
                from: a.media_kind,
                to: b.media_kind,
            }
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSamePlatform => f.write_str("duplicate_same_platform"),
            Self::CrossPlatformDuplicate => f.write_str("cross_platform_duplicate"),
            Self::MediaTransformation { from, to } => {
                write!(f, "media_transformation_{from}_to_{to}")
            }
        }
    }
}

/// A discovered claim in the propagation graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub claim: Claim,
    /// Hop distance from the root claim.
    pub hops: usize,
}

/// A similarity-derived edge between two claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    /// Store-computed similarity between the two claims.
    pub similarity: f64,
    pub relationship: Relationship,
}

/// Bounded graph of claims reachable from a root via the store's
/// related-claims relation. Built fresh per query, never persisted.
///
/// The 50-node cap can truncate mid-traversal, so which branches get
/// expanded depends on frontier insertion order; callers must not assume
/// completeness beyond the cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionGraph {
    pub root: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl EvolutionGraph {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }
}
