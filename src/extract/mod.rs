//! Binary document -> plain text.
//!
//! The ranking pipeline treats extraction as fallible per document: a
//! malformed file is reported and skipped, never fatal to the batch.

mod error;
pub mod pdf;

#[cfg(any(test, feature = "mock"))]
mod mock;

pub use error::ExtractionError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTextExtractor;
pub use pdf::PdfTextExtractor;

/// Converts raw document bytes into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for std::sync::Arc<T> {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        (**self).extract_text(bytes)
    }
}
