//! Resume ranker HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use ranker::config::Config;
use ranker::embedding::{BertConfig, BertEmbedder, CachedEmbedder, EmbeddingProvider};
use ranker::extract::PdfTextExtractor;
use ranker::gateway::{HandlerState, create_router_with_state};
use ranker::ranking::RankingService;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        let port = std::env::var("RANKER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(Config::default().port);
        std::process::exit(ranker::gateway::run_health_check(port).await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        resume_dir = %config.resume_dir.display(),
        "Resume ranker starting"
    );

    let bert_config = if let Some(path) = &config.model_path {
        BertConfig::new(path.clone())
    } else {
        tracing::warn!("No RANKER_MODEL_PATH configured, running embedder in stub mode");
        BertConfig::stub()
    };
    let embedder = BertEmbedder::load(bert_config)?;
    tracing::info!(
        embedding_dim = embedder.embedding_dim(),
        device = embedder.device_label(),
        stub = embedder.is_stub(),
        "Embedder loaded"
    );

    let embedder = CachedEmbedder::new(embedder, config.embedding_cache_capacity);
    let service = RankingService::new(Arc::new(embedder), Arc::new(PdfTextExtractor::new()));

    let state = HandlerState::from_config(Arc::new(service), &config);
    state.library.ensure_dir()?;

    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Resume ranker shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
