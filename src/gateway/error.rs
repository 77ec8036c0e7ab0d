use std::time::Duration;

use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::RANKER_STATUS_HEADER;
use crate::library::LibraryError;
use crate::ranking::RankingError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("ranking failed: {0}")]
    RankingFailed(#[from] RankingError),

    #[error("resume library error: {0}")]
    LibraryFailed(#[from] LibraryError),

    #[error("ranking timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("internal error: {0}")]
    InternalError(String),
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    fn status_and_label(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::MissingField(_) => (StatusCode::UNPROCESSABLE_ENTITY, "missing_field"),
            GatewayError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "too_large"),
            GatewayError::RankingFailed(RankingError::EmptyDescription) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_field")
            }
            GatewayError::RankingFailed(RankingError::Cancelled { .. }) => {
                (StatusCode::GATEWAY_TIMEOUT, "timeout")
            }
            GatewayError::RankingFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "ranking_error"),
            GatewayError::LibraryFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "library_error"),
            GatewayError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            GatewayError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, label) = self.status_and_label();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let mut headers = HeaderMap::new();
        headers.insert(RANKER_STATUS_HEADER, HeaderValue::from_static(label));

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
