use crate::errors::VerityResult;

/// External embedding provider.
///
/// The engine never computes embeddings itself; fused multimodal vectors
/// (per-modality averaging and renormalization) are a provider capability.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text.
    fn embed_text(&self, text: &str) -> VerityResult<Vec<f32>>;

    /// Embed raw image bytes.
    fn embed_image(&self, bytes: &[u8]) -> VerityResult<Vec<f32>>;

    /// Embed an audio file, returning the vector and a transcript.
    fn embed_audio(&self, path: &str) -> VerityResult<(Vec<f32>, String)>;

    /// Embed any combination of modalities into one fused vector,
    /// returning a transcript when audio was supplied.
    fn embed_multimodal(
        &self,
        text: Option<&str>,
        image: Option<&[u8]>,
        audio: Option<&str>,
    ) -> VerityResult<(Vec<f32>, Option<String>)>;

    /// The dimensionality of vectors produced by this provider.
    fn dimensions(&self) -> usize;
}
