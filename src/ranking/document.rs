use std::path::Path;
use std::sync::OnceLock;

use crate::extract::{ExtractionError, TextExtractor};

/// A resume to be ranked: raw bytes plus lazily extracted text.
///
/// The text is computed on first access and memoized, including a failed
/// extraction.
#[derive(Debug)]
pub struct Document {
    name: String,
    file_name: String,
    bytes: Vec<u8>,
    text: OnceLock<Result<String, ExtractionError>>,
}

impl Document {
    pub fn new(name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
            text: OnceLock::new(),
        }
    }

    /// Builds a document named after the stem of `file_name`.
    ///
    /// Any directory components in `file_name` are dropped.
    pub fn from_file_name(file_name: &str, bytes: Vec<u8>) -> Self {
        let path = Path::new(file_name);
        let base = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string());
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| base.clone());

        Self::new(name, base, bytes)
    }

    /// A document whose bytes could not be read. Its extraction always fails
    /// with the given error.
    pub fn unreadable(
        name: impl Into<String>,
        file_name: impl Into<String>,
        error: std::io::Error,
    ) -> Self {
        let text = OnceLock::new();
        let _ = text.set(Err(ExtractionError::Io(error)));
        Self {
            name: name.into(),
            file_name: file_name.into(),
            bytes: Vec::new(),
            text,
        }
    }

    /// Document identifier (file stem).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Extracted text, computed with `extractor` on first call.
    pub fn text(&self, extractor: &dyn TextExtractor) -> Result<&str, &ExtractionError> {
        self.text
            .get_or_init(|| extractor.extract_text(&self.bytes))
            .as_deref()
    }

    /// `true` once extraction has been attempted.
    pub fn is_extracted(&self) -> bool {
        self.text.get().is_some()
    }
}
