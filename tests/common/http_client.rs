//! HTTP client helpers for tests.

use std::time::Duration;

use ranker::gateway::payload::{RankResponse, ResumeListResponse};
use ranker::gateway::{HealthResponse, ReadyResponse};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Form fields of a ranking request.
#[derive(Debug, Clone, Default)]
pub struct RankRequest {
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub required_skills: Option<String>,
    /// `(file name, bytes)` sent as `files` parts.
    pub files: Vec<(String, Vec<u8>)>,
}

impl RankRequest {
    pub fn new(title: &str, description: &str, skills: &str) -> Self {
        Self {
            job_title: Some(title.to_string()),
            job_description: Some(description.to_string()),
            required_skills: Some(skills.to_string()),
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file_name: &str, bytes: &[u8]) -> Self {
        self.files.push((file_name.to_string(), bytes.to_vec()));
        self
    }

    fn text_fields(&self) -> Vec<(&'static str, String)> {
        [
            ("job_title", &self.job_title),
            ("job_description", &self.job_description),
            ("required_skills", &self.required_skills),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|v| (name, v)))
        .collect()
    }
}

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub fn raw(&self) -> &reqwest::Client {
        &self.client
    }

    /// Sends the request as `multipart/form-data`, like a browser `FormData`.
    pub async fn rank_multipart(
        &self,
        request: &RankRequest,
    ) -> Result<RankResponse, TestClientError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        for (file_name, bytes) in &request.files {
            let part = reqwest::multipart::Part::bytes(bytes.clone())
                .file_name(file_name.clone())
                .mime_str("application/pdf")?;
            form = form.part("files", part);
        }

        let resp = self
            .client
            .post(self.url("/rank-resumes"))
            .multipart(form)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Sends the request as `application/x-www-form-urlencoded`.
    pub async fn rank_urlencoded(
        &self,
        request: &RankRequest,
    ) -> Result<RankResponse, TestClientError> {
        let resp = self
            .client
            .post(self.url("/rank-resumes"))
            .form(&request.text_fields())
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn list_resumes(&self) -> Result<ResumeListResponse, TestClientError> {
        let resp = self.client.get(self.url("/list-resumes")).send().await?;
        Self::decode(resp).await
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;
        Self::decode(resp).await
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, TestClientError> {
        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            400 => Err(TestClientError::BadRequest(resp.text().await?)),
            422 => Err(TestClientError::Unprocessable(resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Unprocessable request: {0}")]
    Unprocessable(String),
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}
