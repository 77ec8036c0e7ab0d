use super::{ExtractionError, TextExtractor};

/// Treats document bytes as UTF-8 text. Invalid UTF-8 is reported as malformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTextExtractor;

impl TextExtractor for MockTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::Empty);
        }
        String::from_utf8(bytes.to_vec()).map_err(|e| ExtractionError::Malformed {
            reason: e.to_string(),
        })
    }
}
