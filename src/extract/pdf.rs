use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::debug;

use super::{ExtractionError, TextExtractor};

/// PDF text extraction via `pdf-extract`.
///
/// The parser panics on some malformed inputs; those panics are caught and
/// surfaced as [`ExtractionError::Malformed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::Empty);
        }

        // The header may be preceded by junk, but must appear within the first 1 KiB.
        if !bytes.windows(4).take(1024).any(|w| w == b"%PDF") {
            return Err(ExtractionError::Malformed {
                reason: "missing %PDF header".to_string(),
            });
        }

        let outcome =
            catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));

        match outcome {
            Ok(Ok(text)) => {
                debug!(bytes = bytes.len(), chars = text.len(), "Extracted PDF text");
                Ok(text)
            }
            Ok(Err(e)) => Err(ExtractionError::Malformed {
                reason: e.to_string(),
            }),
            Err(panic) => {
                let reason = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "PDF parser panicked".to_string());
                Err(ExtractionError::Malformed { reason })
            }
        }
    }
}
