//! HTTP gateway (Axum): resume listing, ranking, health and readiness.

pub mod error;
pub mod form;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::GatewayError;
pub use handler::{list_resumes_handler, rank_resumes_handler};
pub use state::HandlerState;

/// Response header carrying a short machine-readable status.
pub const RANKER_STATUS_HEADER: &str = "x-ranker-status";
pub const RANKER_STATUS_HEALTHY: &str = "healthy";
pub const RANKER_STATUS_READY: &str = "ready";
pub const RANKER_STATUS_ERROR: &str = "error";

pub fn create_router_with_state(state: HandlerState) -> Router {
    let body_limit = state.max_upload_bytes;

    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/list-resumes", get(list_resumes_handler))
        .route("/rank-resumes", post(rank_resumes_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ComponentStatus {
    pub http: String,
    pub library: String,
    pub embedding: String,
    pub embedder_mode: String,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        RANKER_STATUS_HEADER,
        HeaderValue::from_static(RANKER_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let library_status = if state.library.is_available() {
        RANKER_STATUS_READY
    } else {
        RANKER_STATUS_ERROR
    };

    let embedder = state.ranking.embedder();
    let embedder_mode = if embedder.is_stub() { "stub" } else { "real" };

    let components = ComponentStatus {
        http: RANKER_STATUS_READY.to_string(),
        library: library_status.to_string(),
        embedding: RANKER_STATUS_READY.to_string(),
        embedder_mode: embedder_mode.to_string(),
    };

    let is_ready = library_status == RANKER_STATUS_READY;
    let (status_code, status_msg) = if is_ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    let mut headers = HeaderMap::new();
    headers.insert(RANKER_STATUS_HEADER, HeaderValue::from_static(status_msg));

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg.to_string(),
            components,
        }),
    )
        .into_response()
}

/// Probes `GET /healthz` on the local port; `0` when healthy, `1` otherwise.
pub async fn run_health_check(port: u16) -> i32 {
    let url = format!("http://127.0.0.1:{port}/healthz");

    let Ok(client) = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}
