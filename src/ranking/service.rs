use std::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use tracing::{debug, info, instrument, warn};

use crate::embedding::EmbeddingProvider;
use crate::extract::TextExtractor;
use crate::scoring::{ScoreBreakdown, cosine_similarity, extract_skills, skill_match_ratio};

use super::document::Document;
use super::error::RankingError;
use super::types::{DocumentFailure, FailureKind, JobQuery, RankingOutcome, ScoredResult};

/// Extraction -> embedding -> similarity + skills -> weighting -> sort.
#[derive(Clone)]
pub struct RankingService {
    embedder: Arc<dyn EmbeddingProvider>,
    extractor: Arc<dyn TextExtractor>,
}

impl std::fmt::Debug for RankingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingService")
            .field("embedding_dim", &self.embedder.embedding_dim())
            .field("is_stub", &self.embedder.is_stub())
            .finish_non_exhaustive()
    }
}

impl RankingService {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            embedder,
            extractor,
        }
    }

    pub fn embedder(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.embedder
    }

    /// Ranks `documents` against `query`.
    ///
    /// The description is embedded once. Documents that fail extraction or
    /// embedding land in [`RankingOutcome::failures`]; a failure to embed the
    /// description or a dimension mismatch fails the whole request.
    pub fn rank(
        &self,
        query: &JobQuery,
        documents: &[Document],
    ) -> Result<RankingOutcome, RankingError> {
        self.rank_until_cancelled(query, documents, &AtomicBool::new(false))
    }

    /// Like [`rank`](Self::rank), but stops with [`RankingError::Cancelled`]
    /// once `cancelled` is set. The flag is checked before the description is
    /// embedded and before each document.
    #[instrument(skip_all, fields(documents = documents.len(), skills = query.required_skills.len()))]
    pub fn rank_until_cancelled(
        &self,
        query: &JobQuery,
        documents: &[Document],
        cancelled: &AtomicBool,
    ) -> Result<RankingOutcome, RankingError> {
        if query.description.trim().is_empty() {
            return Err(RankingError::EmptyDescription);
        }

        if documents.is_empty() {
            debug!("No documents to rank");
            return Ok(RankingOutcome::default());
        }

        let is_cancelled = || cancelled.load(AtomicOrdering::Acquire);
        if is_cancelled() {
            return Err(RankingError::Cancelled { completed: 0 });
        }

        let query_embedding = self
            .embedder
            .embed(&query.description)
            .map_err(RankingError::QueryEmbedding)?;

        let mut outcome = RankingOutcome::default();

        for (completed, document) in documents.iter().enumerate() {
            if is_cancelled() {
                warn!(completed, remaining = documents.len() - completed, "Ranking cancelled");
                return Err(RankingError::Cancelled { completed });
            }

            match self.score_document(query, &query_embedding, document)? {
                Ok(result) => {
                    debug!(
                        name = %result.name,
                        score = result.score(),
                        matched = result.matched_skills.len(),
                        "Scored document"
                    );
                    outcome.results.push(result);
                }
                Err(failure) => {
                    warn!(
                        name = %failure.name,
                        kind = %failure.kind,
                        error = %failure.message,
                        "Skipping document"
                    );
                    outcome.failures.push(failure);
                }
            }
        }

        // Stable: equal scores keep input order.
        outcome
            .results
            .sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));

        info!(
            ranked = outcome.results.len(),
            failed = outcome.failures.len(),
            "Ranking complete"
        );

        Ok(outcome)
    }

    fn score_document(
        &self,
        query: &JobQuery,
        query_embedding: &[f32],
        document: &Document,
    ) -> Result<Result<ScoredResult, DocumentFailure>, RankingError> {
        let failure = |kind: FailureKind, message: String| DocumentFailure {
            name: document.name().to_string(),
            file_name: document.file_name().to_string(),
            kind,
            message,
        };

        let text = match document.text(self.extractor.as_ref()) {
            Ok(text) => text,
            Err(e) => return Ok(Err(failure(FailureKind::Extraction, e.to_string()))),
        };

        let embedding = match self.embedder.embed(text) {
            Ok(embedding) => embedding,
            Err(e) => return Ok(Err(failure(FailureKind::Embedding, e.to_string()))),
        };

        let similarity = cosine_similarity(query_embedding, &embedding)?;
        let matched_skills = extract_skills(text, &query.required_skills);
        let skill_match = skill_match_ratio(matched_skills.len(), query.required_skills.len());

        Ok(Ok(ScoredResult {
            name: document.name().to_string(),
            file_name: document.file_name().to_string(),
            matched_skills,
            breakdown: ScoreBreakdown::combine(similarity, skill_match),
        }))
    }
}
