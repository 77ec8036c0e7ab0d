//! Cross-cutting, shared constants.
//!
//! The scoring weights and the embedding shape are treated as invariants across
//! the embedding, scoring, and ranking modules.

/// Hidden size of `bert-base-uncased`; also the stub embedder's output size.
pub const DEFAULT_EMBEDDING_DIM: usize = 768;

/// Token budget per input. Longer inputs are truncated.
pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

/// Weight of semantic similarity in the final score.
pub const SIMILARITY_WEIGHT: f64 = 0.7;

/// Weight of the skill-match ratio in the final score.
pub const SKILL_MATCH_WEIGHT: f64 = 0.3;

/// Default number of cached embeddings.
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 1024;

/// Default upper bound on one ranking request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default max request body size (32 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// File extension of documents picked up from the resume directory.
pub const RESUME_EXTENSION: &str = "pdf";
