//! Test server harness.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use ranker::embedding::{BertEmbedder, CachedEmbedder};
use ranker::extract::MockTextExtractor;
use ranker::gateway::{HandlerState, create_router_with_state};
use ranker::library::ResumeLibrary;
use ranker::ranking::RankingService;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub port: u16,
    /// Files written into the resume directory before startup.
    pub resumes: Vec<(String, Vec<u8>)>,
    pub resume_dir: Option<PathBuf>,
    pub request_timeout: Duration,
    pub embedding_cache_capacity: u64,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            port: 0,
            resumes: Vec::new(),
            resume_dir: None,
            request_timeout: Duration::from_secs(30),
            embedding_cache_capacity: 128,
        }
    }
}

impl TestServerConfig {
    pub fn with_resume(mut self, file_name: &str, text: &str) -> Self {
        self.resumes
            .push((file_name.to_string(), text.as_bytes().to_vec()));
        self
    }

    pub fn with_raw_resume(mut self, file_name: &str, bytes: &[u8]) -> Self {
        self.resumes.push((file_name.to_string(), bytes.to_vec()));
        self
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub resume_dir: PathBuf,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _temp_dir: Option<TempDir>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn resume_path(&self, file_name: &str) -> PathBuf {
        self.resume_dir.join(file_name)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn find_available_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    Ok(addr.port())
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

fn write_resumes(dir: &Path, resumes: &[(String, Vec<u8>)]) -> Result<(), ServerStartupError> {
    std::fs::create_dir_all(dir)?;
    for (file_name, bytes) in resumes {
        std::fs::write(dir.join(file_name), bytes)?;
    }
    Ok(())
}

/// Spawns a server with no model files and no PDF parsing.
///
/// - **Embedder**: stub `BertEmbedder` behind a `CachedEmbedder`
/// - **Extractor**: `MockTextExtractor` (resume bytes are read as UTF-8 text)
/// - **Library**: a fresh temp directory unless `resume_dir` is given
///
/// ```ignore
/// let server = spawn_test_server(TestServerConfig::default().with_resume("a.pdf", "rust")).await?;
/// let client = TestClient::new(server.url());
/// let list = client.list_resumes().await?;
/// ```
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let port = if config.port == 0 {
        find_available_port().await?
    } else {
        config.port
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let (resume_dir, _temp_dir) = if let Some(path) = config.resume_dir {
        (path, None)
    } else {
        let temp_dir =
            TempDir::new().map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
        (temp_dir.path().join("resumes"), Some(temp_dir))
    };
    write_resumes(&resume_dir, &config.resumes)?;

    let embedder =
        BertEmbedder::stub().map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    let embedder = CachedEmbedder::new(embedder, config.embedding_cache_capacity);
    let service = RankingService::new(Arc::new(embedder), Arc::new(MockTextExtractor));

    let state = HandlerState::new(Arc::new(service), ResumeLibrary::new(resume_dir.clone()))
        .with_request_timeout(config.request_timeout);

    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        resume_dir,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
        _temp_dir,
    })
}
