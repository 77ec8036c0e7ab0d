use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::constants::{DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::library::ResumeLibrary;
use crate::ranking::RankingService;

#[derive(Clone, Debug)]
pub struct HandlerState {
    pub ranking: Arc<RankingService>,

    pub library: ResumeLibrary,

    /// Upper bound on one ranking call.
    pub request_timeout: Duration,

    pub max_upload_bytes: usize,
}

impl HandlerState {
    pub fn new(ranking: Arc<RankingService>, library: ResumeLibrary) -> Self {
        Self {
            ranking,
            library,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn from_config(ranking: Arc<RankingService>, config: &Config) -> Self {
        Self {
            ranking,
            library: ResumeLibrary::new(config.resume_dir.clone()),
            request_timeout: config.request_timeout,
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }
}
