use serde::{Deserialize, Serialize};

use crate::claim::Claim;

/// Input modalities for a cross-modal search. At least one must be set.
#[derive(Debug, Clone, Default)]
pub struct QueryModality {
    pub text: Option<String>,
    /// Raw image bytes.
    pub image: Option<Vec<u8>>,
    /// Path to an audio file, resolved by the embedding provider.
    pub audio: Option<String>,
}

impl QueryModality {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.image.is_none() && self.audio.is_none()
    }
}

/// Why a cross-modal hit matched, given the supplied modalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossModalNote {
    /// Text query matched audio or text content.
    TextMatchedAudioOrText,
    /// Image query matched a similar image.
    ImageMatchedImage,
    /// Text or audio query matched an image's caption or metadata.
    MatchedCaptionOrMetadata,
}

/// One cross-modal search result with its explanatory annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossModalHit {
    pub claim: Claim,
    pub similarity: f64,
    pub note: Option<CrossModalNote>,
}
