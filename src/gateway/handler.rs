use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    Json,
    extract::{Request, State},
};
use tracing::{info, instrument, warn};

use super::error::GatewayError;
use super::form::RankForm;
use super::payload::{RankResponse, ResumeItem, ResumeListResponse};
use super::state::HandlerState;
use crate::ranking::RankingOutcome;

#[instrument(skip(state))]
pub async fn list_resumes_handler(
    State(state): State<HandlerState>,
) -> Result<Json<ResumeListResponse>, GatewayError> {
    let library = state.library.clone();
    let entries = tokio::task::spawn_blocking(move || library.list())
        .await
        .map_err(|e| GatewayError::InternalError(format!("listing task failed: {e}")))??;

    Ok(Json(ResumeListResponse {
        resumes: entries.into_iter().map(ResumeItem::from).collect(),
    }))
}

#[instrument(
    skip(state, request),
    fields(request_id = %uuid::Uuid::new_v4(), source = tracing::field::Empty)
)]
pub async fn rank_resumes_handler(
    State(state): State<HandlerState>,
    request: Request,
) -> Result<Json<RankResponse>, GatewayError> {
    let (query, uploads) = RankForm::from_request(request).await?.into_parts()?;

    let source = if uploads.is_empty() { "library" } else { "upload" };
    tracing::Span::current().record("source", source);

    let ranking = state.ranking.clone();
    let library = state.library.clone();
    let cancelled = Arc::new(AtomicBool::new(false));
    let task_cancelled = Arc::clone(&cancelled);

    let task = tokio::task::spawn_blocking(move || -> Result<RankingOutcome, GatewayError> {
        let documents = if uploads.is_empty() {
            library.load_documents()?
        } else {
            uploads
        };
        Ok(ranking.rank_until_cancelled(&query, &documents, &task_cancelled)?)
    });

    let outcome = match tokio::time::timeout(state.request_timeout, task).await {
        Ok(joined) => joined
            .map_err(|e| GatewayError::InternalError(format!("ranking task failed: {e}")))??,
        Err(_) => {
            cancelled.store(true, Ordering::Release);
            warn!(timeout = ?state.request_timeout, "Ranking timed out");
            return Err(GatewayError::Timeout(state.request_timeout));
        }
    };

    info!(
        ranked = outcome.results.len(),
        failed = outcome.failures.len(),
        top_score = outcome.results.first().map(|r| r.score()),
        "Ranked resumes"
    );

    Ok(Json(RankResponse::from(outcome)))
}
