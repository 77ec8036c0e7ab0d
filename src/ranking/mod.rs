//! Batch ranking of documents against a job query.
//!
//! ```text
//! Document bytes ─▶ TextExtractor ─▶ EmbeddingProvider ─▶ cosine ─┐
//!                         │                                        ├─▶ ScoreBreakdown ─▶ sort
//!                         └────────────▶ extract_skills ───────────┘
//! ```

pub mod document;
pub mod error;
pub mod service;
pub mod types;


pub use document::Document;
pub use error::RankingError;
pub use service::RankingService;
pub use types::{DocumentFailure, FailureKind, JobQuery, RankingOutcome, ScoredResult};
