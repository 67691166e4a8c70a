//! PDF output via printpdf

use printpdf::{BuiltinFont, Color, Mm, PdfDocument, Pt, Rgb};

use crate::config::LayoutConfig;
use crate::diff::LineStyle;

use super::error::{RenderError, Result};
use super::layout::LaidOutDocument;

const DOCUMENT_TITLE: &str = "PDF Comparison";
const LAYER_NAME: &str = "Text";

/// Fill color for a line style
pub fn style_color(style: LineStyle) -> Rgb {
    match style {
        LineStyle::Removed => Rgb::new(1.0, 0.0, 0.0, None),
        LineStyle::Added => Rgb::new(0.0, 0.5, 0.0, None),
        LineStyle::Unchanged => Rgb::new(0.0, 0.0, 0.0, None),
    }
}

/// Write a laid-out document as PDF bytes using built-in Helvetica
pub fn write_pdf(document: &LaidOutDocument, config: &LayoutConfig) -> Result<Vec<u8>> {
    let width = Mm::from(Pt(config.page_width));
    let height = Mm::from(Pt(config.page_height));

    let (doc, first_page, first_layer) = PdfDocument::new(DOCUMENT_TITLE, width, height, LAYER_NAME);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Font(e.to_string()))?;

    for (index, page) in document.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        let mut active: Option<LineStyle> = None;
        for fragment in &page.fragments {
            if active != Some(fragment.style) {
                layer.set_fill_color(Color::Rgb(style_color(fragment.style)));
                active = Some(fragment.style);
            }
            layer.use_text(
                fragment.text.as_str(),
                config.font_size,
                Mm::from(Pt(fragment.x)),
                Mm::from(Pt(fragment.y)),
                &font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|e| RenderError::Write(e.to_string()))
}
