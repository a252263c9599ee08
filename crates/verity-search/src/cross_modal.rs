//! Cross-modal search: one fused query vector across any combination of
//! text, image, and audio, with explanatory annotations on each hit.

use tracing::{debug, info};

use verity_core::claim::MediaKind;
use verity_core::errors::{SearchError, VerityError, VerityResult};
use verity_core::models::{ClaimFilter, CrossModalHit, CrossModalNote, QueryModality};

use crate::engine::SearchEngine;

impl SearchEngine<'_> {
    /// Search all media kinds at once from any combination of modalities.
    ///
    /// Rejects an empty modality set before any external call. The fused
    /// query vector comes from the embedding provider; this engine never
    /// averages vectors itself.
    pub fn cross_modal_search(
        &self,
        modality: &QueryModality,
        limit: usize,
    ) -> VerityResult<Vec<CrossModalHit>> {
        if modality.is_empty() {
            return Err(VerityError::Search(SearchError::NoModality));
        }

        let (vector, transcript) = self.embedder().embed_multimodal(
            modality.text.as_deref(),
            modality.image.as_deref(),
            modality.audio.as_deref(),
        )?;
        if let Some(t) = &transcript {
            debug!(transcript_len = t.len(), "audio transcribed for query");
        }

        let hits = self
            .store()
            .search(&vector, limit, &ClaimFilter::default())?;

        let results: Vec<CrossModalHit> = hits
            .into_iter()
            .map(|hit| {
                let note = annotate(modality, hit.claim.media_kind);
                CrossModalHit {
                    claim: hit.claim,
                    similarity: hit.similarity,
                    note,
                }
            })
            .collect();

        info!(results = results.len(), "cross-modal search complete");
        Ok(results)
    }
}

/// Choose the annotation for a hit given which modalities were supplied.
fn annotate(modality: &QueryModality, hit_kind: MediaKind) -> Option<CrossModalNote> {
    let has_text = modality.text.is_some();
    let has_image = modality.image.is_some();
    let has_audio = modality.audio.is_some();

    if has_text && matches!(hit_kind, MediaKind::Audio | MediaKind::Text) {
        Some(CrossModalNote::TextMatchedAudioOrText)
    } else if has_image && hit_kind == MediaKind::Image {
        Some(CrossModalNote::ImageMatchedImage)
    } else if (has_text || has_audio) && hit_kind == MediaKind::Image {
        Some(CrossModalNote::MatchedCaptionOrMetadata)
    } else {
        None
    }
}
