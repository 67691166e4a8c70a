//! Text extraction error types

use thiserror::Error;

/// Errors raised while turning an upload into text
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Upload does not carry a PDF signature
    #[error("Not a PDF document")]
    NotPdf,

    /// MuPDF could not open or read the document
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    /// Extraction exceeded the configured time budget
    #[error("Text extraction timed out after {0} seconds")]
    Timeout(u64),

    /// Blocking worker panicked or was cancelled
    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

impl From<mupdf::Error> for ExtractError {
    fn from(err: mupdf::Error) -> Self {
        ExtractError::Parse(err.to_string())
    }
}
