//! Comparison document rendering
//!
//! Rendering runs in two passes:
//!
//! 1. [`layout`]: greedy word wrap of annotated lines onto fixed-size pages,
//!    producing positioned, styled fragments
//! 2. [`write_pdf`]: emit the fragments as a PDF with built-in Helvetica,
//!    colored by line style
//!
//! Layout is pure and measured through [`TextMeasure`], so the wrapping and
//! pagination guarantees can be checked without parsing PDF output.

mod error;
mod layout;
mod metrics;
mod pdf;

pub use error::{RenderError, Result};
pub use layout::{layout, Fragment, LaidOutDocument, Page};
pub use metrics::{Helvetica, TextMeasure};
pub use pdf::{style_color, write_pdf};

use crate::config::LayoutConfig;
use crate::diff::AnnotatedLine;

/// Lay out and write annotated lines as a PDF document
pub fn render_pdf(lines: &[AnnotatedLine], config: &LayoutConfig) -> Result<Vec<u8>> {
    let document = layout(lines, config, &Helvetica);
    tracing::debug!(
        lines = lines.len(),
        pages = document.page_count(),
        "Laid out comparison document"
    );
    write_pdf(&document, config)
}
