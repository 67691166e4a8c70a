//! Diff output types

use serde::Serialize;

/// How a line relates to the two compared texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Present in both texts
    Unchanged,
    /// Present only in the first text
    Removed,
    /// Present only in the second text
    Added,
}

impl LineStyle {
    /// Marker used by classic line differs (`"  "`, `"- "`, `"+ "`)
    pub fn marker(self) -> &'static str {
        match self {
            LineStyle::Unchanged => "  ",
            LineStyle::Removed => "- ",
            LineStyle::Added => "+ ",
        }
    }

    /// The style seen from the opposite direction of comparison
    pub fn inverted(self) -> Self {
        match self {
            LineStyle::Unchanged => LineStyle::Unchanged,
            LineStyle::Removed => LineStyle::Added,
            LineStyle::Added => LineStyle::Removed,
        }
    }
}

/// One line of diff output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine {
    pub content: String,
    pub style: LineStyle,
}

impl AnnotatedLine {
    pub fn new(content: impl Into<String>, style: LineStyle) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    pub fn unchanged(content: impl Into<String>) -> Self {
        Self::new(content, LineStyle::Unchanged)
    }

    pub fn removed(content: impl Into<String>) -> Self {
        Self::new(content, LineStyle::Removed)
    }

    pub fn added(content: impl Into<String>) -> Self {
        Self::new(content, LineStyle::Added)
    }
}

impl std::fmt::Display for AnnotatedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.style.marker(), self.content)
    }
}
