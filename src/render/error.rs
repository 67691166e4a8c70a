//! Rendering error types

use thiserror::Error;

/// Errors raised while producing the comparison PDF
#[derive(Debug, Error)]
pub enum RenderError {
    /// Built-in font could not be registered
    #[error("Font error: {0}")]
    Font(String),

    /// Document could not be serialized
    #[error("Failed to write PDF: {0}")]
    Write(String),

    /// Blocking worker panicked or was cancelled
    #[error("Render task failed: {0}")]
    Task(String),
}

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, RenderError>;
