use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::scoring::ScoringError;

/// Request-level ranking failures. Per-document problems are reported as
/// [`DocumentFailure`](super::DocumentFailure)s instead.
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("job description must not be blank")]
    EmptyDescription,

    #[error("failed to embed job description: {0}")]
    QueryEmbedding(#[source] EmbeddingError),

    #[error("ranking cancelled after {completed} documents")]
    Cancelled { completed: usize },

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}
