//! SearchEngine: orchestrates the reasoning-augmented search pipeline.
//!
//! Stage 1: embed query, over-fetch candidates from the store.
//! Stage 2: build a reasoning chain per candidate, score it, re-rank,
//! truncate.

use chrono::Utc;
use tracing::{debug, info};

use verity_core::claim::{MediaKind, Platform};
use verity_core::config::SearchConfig;
use verity_core::errors::VerityResult;
use verity_core::models::reasoning::reasoning_score;
use verity_core::models::{ClaimFilter, ReasonedHit};
use verity_core::traits::{IEmbeddingProvider, IVectorStore};

use crate::reasoning;

/// The search engine. Borrows its collaborators; holds only immutable
/// configuration between calls.
pub struct SearchEngine<'a> {
    store: &'a dyn IVectorStore,
    embedder: &'a dyn IEmbeddingProvider,
    config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    pub fn new(store: &'a dyn IVectorStore, embedder: &'a dyn IEmbeddingProvider) -> Self {
        Self {
            store,
            embedder,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(
        store: &'a dyn IVectorStore,
        embedder: &'a dyn IEmbeddingProvider,
        config: SearchConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            config,
        }
    }

    pub(crate) fn store(&self) -> &dyn IVectorStore {
        self.store
    }

    pub(crate) fn embedder(&self) -> &dyn IEmbeddingProvider {
        self.embedder
    }

    /// Search with explainable reasoning chains.
    ///
    /// Over-fetches `limit * candidate_multiplier` hits, attaches a chain
    /// to each, re-ranks by (reasoning score, raw similarity) descending,
    /// and truncates to `limit`. Deterministic given deterministic store
    /// output. min_trust_score is only set when the threshold is positive.
    pub fn search_with_reasoning(
        &self,
        query: &str,
        media_kind: Option<MediaKind>,
        platform: Option<Platform>,
        trust_threshold: f64,
        limit: usize,
    ) -> VerityResult<Vec<ReasonedHit>> {
        let query_vector = self.embedder.embed_text(query)?;

        let filter = ClaimFilter {
            media_kind,
            platform,
            min_trust_score: (trust_threshold > 0.0).then_some(trust_threshold),
            ..ClaimFilter::default()
        };

        let fetch = limit * self.config.candidate_multiplier;
        let candidates = self.store.search(&query_vector, fetch, &filter)?;
        debug!(
            candidates = candidates.len(),
            fetch, "vector store returned candidates"
        );

        let now = Utc::now();
        let mut reasoned: Vec<ReasonedHit> = candidates
            .into_iter()
            .map(|hit| {
                let chain = reasoning::build_chain(&hit, &filter, &self.config, now);
                let score = reasoning_score(&chain);
                ReasonedHit {
                    claim: hit.claim,
                    similarity: hit.similarity,
                    reasoning: chain,
                    reasoning_score: score,
                }
            })
            .collect();

        // Primary key reasoning score, secondary raw similarity.
        reasoned.sort_by(|a, b| {
            (b.reasoning_score, b.similarity)
                .partial_cmp(&(a.reasoning_score, a.similarity))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        reasoned.truncate(limit);

        info!(results = reasoned.len(), query_len = query.len(), "search complete");
        Ok(reasoned)
    }
}
