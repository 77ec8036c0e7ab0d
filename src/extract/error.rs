use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is empty")]
    Empty,

    #[error("malformed document: {reason}")]
    Malformed { reason: String },

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}
