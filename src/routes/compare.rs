//! Comparison upload endpoint
//!
//! `POST /upload-pdf/` takes a multipart form with exactly two file parts
//! and answers with the highlighted comparison PDF, or a JSON error body:
//!
//! ```json
//! { "error": "Please upload exactly 2 PDF files.", "code": "VALIDATION_ERROR" }
//! ```

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::header,
    response::IntoResponse,
    routing::post,
    Router,
};

use crate::compare::UploadedFile;
use crate::error::Result;
use crate::state::AppState;

/// File name offered to the browser for the result
pub const RESULT_FILE_NAME: &str = "comparison_result.pdf";

pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/upload-pdf/", post(upload_pdfs))
        .route("/upload-pdf", post(upload_pdfs))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// POST /upload-pdf/
async fn upload_pdfs(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let files = read_files(multipart).await?;
    let comparison = state.comparer().compare(files).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", RESULT_FILE_NAME),
            ),
            (
                header::HeaderName::from_static("x-comparison-id"),
                comparison.id.to_string(),
            ),
        ],
        comparison.pdf,
    ))
}

/// Collect every part that carries a file name
async fn read_files(mut multipart: Multipart) -> Result<Vec<UploadedFile>> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        let Some(file_name) = field.file_name().map(|s| s.to_string()) else {
            tracing::debug!("Skipping non-file field '{}'", name);
            continue;
        };

        let data = field.bytes().await?;
        tracing::debug!(
            "Received file: field='{}', filename='{}', {} bytes",
            name,
            file_name,
            data.len()
        );
        files.push(UploadedFile { file_name, data });
    }

    Ok(files)
}
