//! Embedding + model utilities.
//!
//! - [`bert`] turns text into a `[CLS]` embedding (or a stub vector).
//! - [`cache`] memoizes embeddings by content hash.

/// BERT embedder.
pub mod bert;
/// Content-addressed embedding cache.
pub mod cache;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Deterministic model-free embedding.
pub mod stub;
/// Tokenizer loading and vector helpers.
pub mod utils;

#[cfg(any(test, feature = "mock"))]
mod mock;

pub use bert::{BERT_EMBEDDING_DIM, BERT_MAX_SEQ_LEN, BertConfig, BertEmbedder};
pub use cache::CachedEmbedder;
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;

/// Turns text into a fixed-length vector.
///
/// Implementations are loaded once at startup and shared read-only across
/// requests, so they must be `Send + Sync`.
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds `text`. Empty input must succeed with a deterministic vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Length of every vector returned by [`embed`](Self::embed).
    fn embedding_dim(&self) -> usize;

    /// `true` when no real model backs this provider.
    fn is_stub(&self) -> bool {
        false
    }

    /// Compute device label for readiness reporting.
    fn device_label(&self) -> &'static str {
        "cpu"
    }
}

impl<E: EmbeddingProvider + ?Sized> EmbeddingProvider for std::sync::Arc<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }

    fn device_label(&self) -> &'static str {
        (**self).device_label()
    }
}
