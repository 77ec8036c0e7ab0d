//! `POST /rank-resumes` body parsing.
//!
//! Accepts `multipart/form-data` (browser `FormData`, optionally carrying
//! `files` / `file` uploads) or `application/x-www-form-urlencoded`.

use axum::{
    Form,
    extract::{FromRequest, Multipart, Request, multipart::MultipartError},
    http::{StatusCode, header::CONTENT_TYPE},
};
use serde::Deserialize;
use tracing::debug;

use super::error::GatewayError;
use crate::ranking::{Document, JobQuery};
use crate::scoring::parse_skill_list;

const FIELD_JOB_TITLE: &str = "job_title";
const FIELD_JOB_DESCRIPTION: &str = "job_description";
const FIELD_REQUIRED_SKILLS: &str = "required_skills";
const FALLBACK_UPLOAD_NAME: &str = "upload.pdf";

/// Raw form fields before validation.
#[derive(Debug, Default, Deserialize)]
pub struct RankForm {
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub required_skills: Option<String>,
    #[serde(skip)]
    pub uploads: Vec<Document>,
}

impl RankForm {
    /// Parses the request body according to its `Content-Type`.
    pub async fn from_request(request: Request) -> Result<Self, GatewayError> {
        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(request, &())
                .await
                .map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
            Self::from_multipart(multipart).await
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<RankForm>::from_request(request, &())
                .await
                .map_err(|e| {
                    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                        GatewayError::PayloadTooLarge(e.body_text())
                    } else {
                        GatewayError::InvalidRequest(e.body_text())
                    }
                })?;
            Ok(form)
        } else {
            Err(GatewayError::InvalidRequest(format!(
                "unsupported content type {content_type:?}; expected multipart/form-data or application/x-www-form-urlencoded"
            )))
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, GatewayError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "files" | "file" => {
                    let file_name = field
                        .file_name()
                        .filter(|n| !n.trim().is_empty())
                        .unwrap_or(FALLBACK_UPLOAD_NAME)
                        .to_string();
                    let bytes = field.bytes().await.map_err(multipart_error)?;
                    debug!(file_name = %file_name, size = bytes.len(), "Received upload");
                    form.uploads
                        .push(Document::from_file_name(&file_name, bytes.to_vec()));
                }
                FIELD_JOB_TITLE => {
                    form.job_title = Some(field.text().await.map_err(multipart_error)?)
                }
                FIELD_JOB_DESCRIPTION => {
                    form.job_description = Some(field.text().await.map_err(multipart_error)?)
                }
                FIELD_REQUIRED_SKILLS => {
                    form.required_skills = Some(field.text().await.map_err(multipart_error)?)
                }
                other => debug!(field = other, "Ignoring unknown form field"),
            }
        }

        Ok(form)
    }

    /// Validates required fields and splits into the query and any uploads.
    pub fn into_parts(self) -> Result<(JobQuery, Vec<Document>), GatewayError> {
        let title = self
            .job_title
            .ok_or(GatewayError::MissingField(FIELD_JOB_TITLE))?;
        let description = self
            .job_description
            .ok_or(GatewayError::MissingField(FIELD_JOB_DESCRIPTION))?;
        let skills = self
            .required_skills
            .ok_or(GatewayError::MissingField(FIELD_REQUIRED_SKILLS))?;

        let query = JobQuery::new(title, description, parse_skill_list(&skills));
        Ok((query, self.uploads))
    }
}

fn multipart_error(e: MultipartError) -> GatewayError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        GatewayError::PayloadTooLarge(e.body_text())
    } else {
        GatewayError::InvalidRequest(e.body_text())
    }
}
