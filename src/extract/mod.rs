//! PDF text extraction
//!
//! Text extraction sits behind the [`TextExtractor`] trait so the comparison
//! pipeline does not depend on a particular PDF library. The production
//! implementation uses MuPDF on a blocking worker thread.
//!
//! Extracted text is normalized per line at this boundary (see
//! [`normalize_lines`]) before it reaches the diff stage.

mod error;
mod mupdf_extractor;
mod normalize;

use async_trait::async_trait;
use axum::body::Bytes;

pub use self::error::{ExtractError, Result};
pub use self::mupdf_extractor::{looks_like_pdf, MupdfExtractor, PDF_SIGNATURE_WINDOW};
pub use self::normalize::{normalize, normalize_lines};

/// Source of plain text for an uploaded document
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract the concatenated text of every page, one line per text line
    async fn extract_text(&self, data: Bytes) -> Result<String>;
}
