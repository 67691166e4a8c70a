//! Error types for the PDF Diff server

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::compare::CompareError;
use crate::extract::ExtractError;
use crate::render::RenderError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Request does not carry exactly two files
    #[error("{0}")]
    Validation(String),

    /// Multipart body could not be read
    #[error("Failed to read upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("{0}")]
    Extraction(String),

    #[error("Failed to render comparison: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CompareError> for AppError {
    fn from(err: CompareError) -> Self {
        match err {
            CompareError::FileCount(_) => AppError::Validation(err.to_string()),
            CompareError::Extract {
                source: ExtractError::Task(ref msg),
                ..
            } => AppError::Internal(msg.clone()),
            CompareError::Extract { .. } => AppError::Extraction(err.to_string()),
            CompareError::Render(RenderError::Task(msg)) => AppError::Internal(msg),
            CompareError::Render(e) => AppError::Render(e),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upload(e) => e.status(),
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Render(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Upload(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                "PAYLOAD_TOO_LARGE"
            }
            AppError::Upload(_) => "UPLOAD_ERROR",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Render(_) => "RENDER_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Validation(msg) | AppError::Extraction(msg) => {
                tracing::warn!("Rejected comparison: {}", msg);
                msg.clone()
            }
            AppError::Upload(e) => {
                tracing::warn!("Upload error: {}", e);
                self.to_string()
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {}", e);
                self.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            code: self.code(),
        });

        (status, body).into_response()
    }
}
