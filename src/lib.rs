//! Resume ranking library (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`RankingService`] - extraction, embedding, scoring and sorting for one request
//! - [`JobQuery`], [`Document`], [`RankingOutcome`] - ranking inputs and outputs
//! - [`ResumeLibrary`] - the directory of resume PDFs
//!
//! ## Embedding & Scoring
//! - [`EmbeddingProvider`], [`BertEmbedder`], [`CachedEmbedder`] - text to vectors
//! - [`cosine_similarity`], [`extract_skills`], [`ScoreBreakdown`] - scoring primitives
//!
//! ## Extraction
//! - [`TextExtractor`], [`PdfTextExtractor`] - document bytes to text
//!
//! ## Server
//! - [`Config`] - environment-backed settings
//! - [`gateway`] - Axum router and handlers
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod extract;
pub mod gateway;
pub mod library;
pub mod ranking;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use embedding::{
    BERT_EMBEDDING_DIM, BERT_MAX_SEQ_LEN, BertConfig, BertEmbedder, CachedEmbedder,
    EmbeddingError, EmbeddingProvider,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use extract::{ExtractionError, PdfTextExtractor, TextExtractor};
#[cfg(any(test, feature = "mock"))]
pub use extract::MockTextExtractor;
pub use gateway::{GatewayError, HandlerState, create_router_with_state};
pub use library::{LibraryError, ResumeEntry, ResumeLibrary};
pub use ranking::{
    Document, DocumentFailure, FailureKind, JobQuery, RankingError, RankingOutcome,
    RankingService, ScoredResult,
};
pub use scoring::{
    ScoreBreakdown, ScoringError, cosine_similarity, extract_skills, parse_skill_list,
    skill_match_ratio,
};
