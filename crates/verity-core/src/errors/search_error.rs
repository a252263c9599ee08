/// Search subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("no query modality supplied")]
    NoModality,

    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("ranking failed: {reason}")]
    RankingFailed { reason: String },
}
