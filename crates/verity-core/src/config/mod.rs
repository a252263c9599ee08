//! Engine configuration.
//!
//! All configuration is immutable after construction; the engine holds no
//! other shared state, so unlimited concurrent reads are safe.

pub mod defaults;
pub mod graph_config;
pub mod search_config;
pub mod trust_config;

pub use graph_config::GraphConfig;
pub use search_config::SearchConfig;
pub use trust_config::TrustConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{VerityError, VerityResult};

/// Top-level configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerityConfig {
    pub trust: TrustConfig,
    pub search: SearchConfig,
    pub graph: GraphConfig,
}

impl VerityConfig {
    /// Parse a TOML document. Missing sections and fields fall back to
    /// defaults.
    pub fn from_toml(text: &str) -> VerityResult<Self> {
        toml::from_str(text).map_err(|e| VerityError::invalid_input(format!("bad config: {e}")))
    }
}
