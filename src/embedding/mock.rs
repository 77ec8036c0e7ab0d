use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::stub::hashed_bag_of_words;
use super::{EmbeddingError, EmbeddingProvider};

/// Counting embedder for tests. Fails for texts registered via [`failing_on`](Self::failing_on).
#[derive(Debug, Default)]
pub struct MockEmbedder {
    dim: usize,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }

    /// Makes `embed(text)` return [`EmbeddingError::InferenceFailed`].
    pub fn failing_on(mut self, text: impl Into<String>) -> Self {
        self.failing.insert(text.into());
        self
    }

    /// Number of `embed` calls so far (including failed ones).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingProvider for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(text) {
            return Err(EmbeddingError::InferenceFailed {
                reason: "mock failure".to_string(),
            });
        }
        Ok(hashed_bag_of_words(text, self.dim))
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn is_stub(&self) -> bool {
        true
    }
}
