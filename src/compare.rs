//! Comparison pipeline
//!
//! Runs one request end to end: validate the uploads, extract and normalize
//! the text of both documents, diff them line by line and render the
//! highlighted result. Every request owns its data; the rendered PDF is
//! returned in memory.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use thiserror::Error;
use tokio::time::timeout;
use uuid::Uuid;

use crate::config::LayoutConfig;
use crate::diff::{annotate_lines, AnnotatedLine, LineStyle};
use crate::extract::{normalize_lines, ExtractError, TextExtractor};
use crate::render::{render_pdf, RenderError};

/// Number of documents a comparison takes
pub const REQUIRED_FILES: usize = 2;

/// Extraction timeout when none is configured
pub const DEFAULT_EXTRACT_TIMEOUT_SECS: u64 = 30;

/// An uploaded document
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }
}

/// Line counts per style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub removed: usize,
    pub added: usize,
}

impl DiffSummary {
    pub fn from_lines(lines: &[AnnotatedLine]) -> Self {
        lines.iter().fold(Self::default(), |mut acc, line| {
            match line.style {
                LineStyle::Unchanged => acc.unchanged += 1,
                LineStyle::Removed => acc.removed += 1,
                LineStyle::Added => acc.added += 1,
            }
            acc
        })
    }

    pub fn is_identical(&self) -> bool {
        self.removed == 0 && self.added == 0
    }
}

/// A finished comparison
#[derive(Debug)]
pub struct Comparison {
    pub id: Uuid,
    pub pdf: Vec<u8>,
    pub summary: DiffSummary,
}

/// Comparison pipeline errors
#[derive(Debug, Error)]
pub enum CompareError {
    /// Anything other than exactly two files was uploaded
    #[error("Please upload exactly 2 PDF files.")]
    FileCount(usize),

    #[error("Failed to extract text from '{file_name}': {source}")]
    Extract {
        file_name: String,
        #[source]
        source: ExtractError,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Runs comparisons with a shared extractor and page layout
#[derive(Clone)]
pub struct Comparer {
    extractor: Arc<dyn TextExtractor>,
    layout: LayoutConfig,
    archive_dir: Option<PathBuf>,
    extract_timeout_secs: u64,
}

impl Comparer {
    pub fn new(extractor: Arc<dyn TextExtractor>, layout: LayoutConfig) -> Self {
        Self {
            extractor,
            layout,
            archive_dir: None,
            extract_timeout_secs: DEFAULT_EXTRACT_TIMEOUT_SECS,
        }
    }

    /// Also keep a copy of every result as `<dir>/<id>.pdf`
    pub fn with_archive_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.archive_dir = dir;
        self
    }

    /// Give up on a document whose extraction runs longer than `secs`
    pub fn with_extract_timeout(mut self, secs: u64) -> Self {
        self.extract_timeout_secs = secs;
        self
    }

    /// Compare the first uploaded document against the second
    pub async fn compare(&self, files: Vec<UploadedFile>) -> Result<Comparison, CompareError> {
        let [old, new]: [UploadedFile; REQUIRED_FILES] = files
            .try_into()
            .map_err(|files: Vec<UploadedFile>| CompareError::FileCount(files.len()))?;

        let id = Uuid::new_v4();
        tracing::info!(
            comparison_id = %id,
            old = %old.file_name,
            new = %new.file_name,
            old_bytes = old.data.len(),
            new_bytes = new.data.len(),
            "Starting comparison"
        );

        let (old_lines, new_lines) = tokio::try_join!(self.lines_of(old), self.lines_of(new))?;

        let annotated = annotate_lines(&old_lines, &new_lines);
        let summary = DiffSummary::from_lines(&annotated);
        tracing::debug!(
            comparison_id = %id,
            unchanged = summary.unchanged,
            removed = summary.removed,
            added = summary.added,
            identical = summary.is_identical(),
            "Diff complete"
        );

        let layout = self.layout.clone();
        let pdf = tokio::task::spawn_blocking(move || render_pdf(&annotated, &layout))
            .await
            .map_err(|e| RenderError::Task(format!("Task join error: {}", e)))??;

        tracing::info!(comparison_id = %id, bytes = pdf.len(), "Comparison rendered");

        if let Some(dir) = &self.archive_dir {
            if let Err(e) = archive(dir, id, &pdf).await {
                tracing::warn!(comparison_id = %id, "Failed to archive comparison: {}", e);
            }
        }

        Ok(Comparison { id, pdf, summary })
    }

    async fn lines_of(&self, file: UploadedFile) -> Result<Vec<String>, CompareError> {
        let secs = self.extract_timeout_secs;
        let text = timeout(Duration::from_secs(secs), self.extractor.extract_text(file.data))
            .await
            .unwrap_or(Err(ExtractError::Timeout(secs)))
            .map_err(|source| CompareError::Extract {
                file_name: file.file_name.clone(),
                source,
            })?;
        let lines = normalize_lines(&text);
        tracing::debug!(file = %file.file_name, lines = lines.len(), "Extracted lines");
        Ok(lines)
    }
}

/// Write a result under its unique comparison id
async fn archive(dir: &Path, id: Uuid, pdf: &[u8]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("{}.pdf", id));
    tokio::fs::write(&path, pdf).await?;
    tracing::debug!(path = %path.display(), "Archived comparison");
    Ok(path)
}
