//! MuPDF-backed text extraction

use async_trait::async_trait;
use axum::body::Bytes;
use mupdf::{Document, TextPageOptions};

use super::{ExtractError, Result, TextExtractor};

/// How far into the upload the `%PDF` signature may appear
pub const PDF_SIGNATURE_WINDOW: usize = 1024;

const PDF_MIME: &str = "application/pdf";

/// Check for a `%PDF` signature near the start of the data.
///
/// Readers tolerate leading junk before the header, so the signature is
/// searched within the first [`PDF_SIGNATURE_WINDOW`] bytes rather than
/// only at offset zero.
pub fn looks_like_pdf(data: &[u8]) -> bool {
    let window = &data[..data.len().min(PDF_SIGNATURE_WINDOW)];
    window.windows(4).any(|w| w == b"%PDF")
}

/// Extracts page text with MuPDF
#[derive(Debug, Clone, Copy, Default)]
pub struct MupdfExtractor;

#[async_trait]
impl TextExtractor for MupdfExtractor {
    async fn extract_text(&self, data: Bytes) -> Result<String> {
        if !looks_like_pdf(&data) {
            return Err(ExtractError::NotPdf);
        }

        // Offload to blocking task since MuPDF operations are CPU-bound
        tokio::task::spawn_blocking(move || extract_document_text(&data))
            .await
            .map_err(|e| ExtractError::Task(format!("Task join error: {}", e)))?
    }
}

/// Concatenate the text of every page, one output line per MuPDF text line
fn extract_document_text(data: &[u8]) -> Result<String> {
    let doc = Document::from_bytes(data, PDF_MIME)?;
    let page_count = doc.page_count()?;

    let mut text = String::new();
    for index in 0..page_count {
        let page = doc.load_page(index)?;
        let text_page = page.to_text_page(TextPageOptions::empty())?;

        for block in text_page.blocks() {
            for line in block.lines() {
                text.extend(line.chars().filter_map(|ch| ch.char()));
                text.push('\n');
            }
        }
    }

    tracing::debug!(pages = page_count, chars = text.len(), "Extracted PDF text");
    Ok(text)
}
