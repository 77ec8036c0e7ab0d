//! In-memory embedding cache keyed by the BLAKE3 hash of the input text.
//!
//! Bounded (moka eviction) and transparent: a hit returns exactly what the
//! wrapped provider returned for the same text. Errors are never cached.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::trace;

use super::{EmbeddingError, EmbeddingProvider};

/// Wraps an [`EmbeddingProvider`] with a bounded content-addressed cache.
pub struct CachedEmbedder<E> {
    inner: E,
    entries: Option<Cache<[u8; 32], Arc<Vec<f32>>>>,
}

impl<E: EmbeddingProvider> CachedEmbedder<E> {
    /// Creates a cache holding at most `capacity` embeddings. `0` disables caching.
    pub fn new(inner: E, capacity: u64) -> Self {
        let entries = (capacity > 0).then(|| Cache::builder().max_capacity(capacity).build());
        Self { inner, entries }
    }

    /// Returns the wrapped provider.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Returns `true` if caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    /// Drops every cached embedding.
    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            entries.invalidate_all();
        }
    }
}

impl<E: EmbeddingProvider> EmbeddingProvider for CachedEmbedder<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let Some(entries) = &self.entries else {
            return self.inner.embed(text);
        };

        let key = *blake3::hash(text.as_bytes()).as_bytes();
        if let Some(hit) = entries.get(&key) {
            trace!(text_len = text.len(), "Embedding cache hit");
            return Ok(hit.as_ref().clone());
        }

        let embedding = self.inner.embed(text)?;
        entries.insert(key, Arc::new(embedding.clone()));
        Ok(embedding)
    }

    fn embedding_dim(&self) -> usize {
        self.inner.embedding_dim()
    }

    fn is_stub(&self) -> bool {
        self.inner.is_stub()
    }

    fn device_label(&self) -> &'static str {
        self.inner.device_label()
    }
}
