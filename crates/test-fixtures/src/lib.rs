//! Shared builders and mock collaborators for integration tests.
//!
//! The mock store holds claims and a fixed neighbor relation in memory and
//! answers searches deterministically, in insertion order.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use verity_core::claim::{Claim, EvidenceEntry, MediaKind, Platform, TrustScore};
use verity_core::errors::{VerityError, VerityResult};
use verity_core::models::{ClaimFilter, ScoredHit};
use verity_core::traits::{IEmbeddingProvider, IVectorStore};

/// A claim with the given id, kind, and platform, created `age_days` ago.
pub fn make_claim(id: &str, media_kind: MediaKind, platform: Platform, age_days: i64) -> Claim {
    let now = Utc::now();
    let mut claim = Claim::new(id, media_kind, platform);
    claim.created_at = now - Duration::days(age_days);
    claim.last_updated = claim.created_at;
    claim
}

/// An evidence entry for a claim at a fixed timestamp.
pub fn make_evidence(
    claim_id: &str,
    supporting: bool,
    credibility: f64,
    recorded_at: DateTime<Utc>,
) -> EvidenceEntry {
    EvidenceEntry {
        id: uuid::Uuid::new_v4().to_string(),
        claim_id: claim_id.to_string(),
        media_kind: MediaKind::Text,
        content: "test evidence".to_string(),
        source_url: None,
        recorded_at,
        supporting,
        credibility: TrustScore::new(credibility),
    }
}

/// In-memory vector store mock.
///
/// `search` returns seeded claims that pass the filter, with a similarity
/// that descends from `base_similarity` in insertion order. `related`
/// returns the explicitly seeded neighbor list for a claim.
pub struct MockStore {
    claims: Vec<Claim>,
    by_id: HashMap<String, usize>,
    neighbors: HashMap<String, Vec<(String, f64)>>,
    base_similarity: f64,
    /// Calls recorded for assertions: (method, argument).
    pub calls: Mutex<Vec<(String, String)>>,
    /// When set, every method fails with an ExternalDependency error.
    pub fail: bool,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            claims: Vec::new(),
            by_id: HashMap::new(),
            neighbors: HashMap::new(),
            base_similarity: 0.9,
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn with_base_similarity(mut self, similarity: f64) -> Self {
        self.base_similarity = similarity;
        self
    }

    pub fn failing() -> Self {
        let mut store = Self::new();
        store.fail = true;
        store
    }

    pub fn insert(&mut self, claim: Claim) {
        self.by_id.insert(claim.id.clone(), self.claims.len());
        self.claims.push(claim);
    }

    /// Declare `to` a neighbor of `from` with the given similarity.
    pub fn link(&mut self, from: &str, to: &str, similarity: f64) {
        self.neighbors
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), similarity));
    }

    /// Declare a symmetric neighbor relation.
    pub fn link_both(&mut self, a: &str, b: &str, similarity: f64) {
        self.link(a, b, similarity);
        self.link(b, a, similarity);
    }

    fn check_fail(&self) -> VerityResult<()> {
        if self.fail {
            Err(VerityError::external("mock-store", "store unavailable"))
        } else {
            Ok(())
        }
    }

    fn record(&self, method: &str, arg: &str) {
        self.calls
            .lock()
            .expect("calls lock")
            .push((method.to_string(), arg.to_string()));
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IVectorStore for MockStore {
    fn search(
        &self,
        _vector: &[f32],
        limit: usize,
        filter: &ClaimFilter,
    ) -> VerityResult<Vec<ScoredHit>> {
        self.check_fail()?;
        self.record("search", &format!("limit={limit}"));
        Ok(self
            .claims
            .iter()
            .filter(|c| filter.matches(c))
            .enumerate()
            .map(|(i, c)| ScoredHit {
                claim: c.clone(),
                similarity: (self.base_similarity - i as f64 * 0.05).max(0.0),
            })
            .take(limit)
            .collect())
    }

    fn get(&self, id: &str) -> VerityResult<Option<Claim>> {
        self.check_fail()?;
        self.record("get", id);
        Ok(self.by_id.get(id).map(|&i| self.claims[i].clone()))
    }

    fn related(&self, id: &str, limit: usize) -> VerityResult<Vec<ScoredHit>> {
        self.check_fail()?;
        self.record("related", id);
        let neighbors = match self.neighbors.get(id) {
            Some(n) => n,
            None => return Ok(Vec::new()),
        };
        Ok(neighbors
            .iter()
            .filter_map(|(nid, sim)| {
                self.by_id.get(nid).map(|&i| ScoredHit {
                    claim: self.claims[i].clone(),
                    similarity: *sim,
                })
            })
            .take(limit)
            .collect())
    }
}

/// Embedding provider mock returning fixed-dimension zero vectors.
pub struct MockEmbedder {
    pub fail: bool,
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }

    fn check_fail(&self) -> VerityResult<()> {
        if self.fail {
            Err(VerityError::external("mock-embedder", "provider unavailable"))
        } else {
            Ok(())
        }
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl IEmbeddingProvider for MockEmbedder {
    fn embed_text(&self, _text: &str) -> VerityResult<Vec<f32>> {
        self.check_fail()?;
        Ok(vec![0.0; self.dimensions()])
    }

    fn embed_image(&self, _bytes: &[u8]) -> VerityResult<Vec<f32>> {
        self.check_fail()?;
        Ok(vec![0.0; self.dimensions()])
    }

    fn embed_audio(&self, _path: &str) -> VerityResult<(Vec<f32>, String)> {
        self.check_fail()?;
        Ok((vec![0.0; self.dimensions()], "transcript".to_string()))
    }

    fn embed_multimodal(
        &self,
        _text: Option<&str>,
        _image: Option<&[u8]>,
        audio: Option<&str>,
    ) -> VerityResult<(Vec<f32>, Option<String>)> {
        self.check_fail()?;
        let transcript = audio.map(|_| "transcript".to_string());
        Ok((vec![0.0; self.dimensions()], transcript))
    }

    fn dimensions(&self) -> usize {
        8
    }
}
