//! Greedy word-wrap layout
//!
//! Places annotated lines onto fixed-size pages. Words are appended to a
//! line buffer while the buffer still fits the content width; when the
//! next word would overflow, the buffer is drawn at the cursor and the
//! cursor moves down one line. Falling below the bottom margin starts a
//! new page with the cursor back at the top.
//!
//! ```text
//!  top ──▶ ┌──────────────────────────────┐
//!          │ x=left  fragment             │  ▲
//!          │         fragment             │  │ line_height
//!          │         ...                  │  ▼
//! bottom ─▶│                              │
//!          └──────────────────────────────┘
//! ```

use crate::config::LayoutConfig;
use crate::diff::{AnnotatedLine, LineStyle};

use super::metrics::TextMeasure;

/// A piece of text drawn at a fixed position
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub x: f32,
    /// Baseline, measured up from the bottom edge
    pub y: f32,
    pub style: LineStyle,
}

/// One laid-out page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub fragments: Vec<Fragment>,
}

/// A fully laid-out document, ready to be written out
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All fragments in drawing order
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.pages.iter().flat_map(|p| p.fragments.iter())
    }
}

/// Lay out the annotated lines on pages described by `config`.
///
/// Always yields at least one page; an empty input produces a single blank
/// page.
pub fn layout<M: TextMeasure>(
    lines: &[AnnotatedLine],
    config: &LayoutConfig,
    measure: &M,
) -> LaidOutDocument {
    let mut cursor = Cursor::new(config, measure);

    for line in lines {
        for word in line.content.split(' ').filter(|w| !w.is_empty()) {
            cursor.push_word(word, line.style);
        }
        cursor.flush(line.style);
    }

    cursor.finish()
}

struct Cursor<'a, M> {
    config: &'a LayoutConfig,
    measure: &'a M,
    y: f32,
    buffer: String,
    pages: Vec<Page>,
    current: Page,
}

impl<'a, M: TextMeasure> Cursor<'a, M> {
    fn new(config: &'a LayoutConfig, measure: &'a M) -> Self {
        Self {
            config,
            measure,
            y: config.top,
            buffer: String::new(),
            pages: Vec::new(),
            current: Page::default(),
        }
    }

    fn fits(&self, text: &str) -> bool {
        self.measure.width(text, self.config.font_size) < self.config.content_width
    }

    fn push_word(&mut self, word: &str, style: LineStyle) {
        let candidate = format!("{}{}", self.buffer, word);
        if self.fits(&candidate) {
            self.buffer = candidate;
            self.buffer.push(' ');
            return;
        }

        self.flush(style);

        if self.fits(word) {
            self.buffer.push_str(word);
            self.buffer.push(' ');
        } else {
            self.push_long_word(word, style);
        }
    }

    /// Hard-break a word wider than the content width into chunks that fit.
    ///
    /// The last chunk stays in the buffer so following words can join it.
    fn push_long_word(&mut self, word: &str, style: LineStyle) {
        let mut chunk = String::new();
        for c in word.chars() {
            chunk.push(c);
            if !self.fits(&chunk) && chunk.chars().count() > 1 {
                chunk.pop();
                self.buffer = std::mem::take(&mut chunk);
                self.flush(style);
                chunk.push(c);
            }
        }
        self.buffer = chunk;
        self.buffer.push(' ');
    }

    /// Draw the buffer, if any, and advance to the next line
    fn flush(&mut self, style: LineStyle) {
        let text = self.buffer.trim();
        if text.is_empty() {
            self.buffer.clear();
            return;
        }

        self.current.fragments.push(Fragment {
            text: text.to_string(),
            x: self.config.left_margin,
            y: self.y,
            style,
        });
        self.buffer.clear();

        self.y -= self.config.line_height;
        if self.y < self.config.bottom() {
            self.pages.push(std::mem::take(&mut self.current));
            self.y = self.config.top;
        }
    }

    fn finish(mut self) -> LaidOutDocument {
        if !self.current.fragments.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        LaidOutDocument { pages: self.pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::metrics::Helvetica;

    /// Every character is one point wide at any font size
    struct Monospace;

    impl TextMeasure for Monospace {
        fn width(&self, text: &str, _font_size: f32) -> f32 {
            text.chars().count() as f32
        }
    }

    fn narrow_config(content_width: f32) -> LayoutConfig {
        LayoutConfig {
            content_width,
            ..LayoutConfig::default()
        }
    }

    fn words_of<'a>(texts: impl Iterator<Item = &'a str>) -> Vec<String> {
        texts
            .flat_map(|t| t.split(' '))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_short_lines_one_fragment_each() {
        let lines = vec![
            AnnotatedLine::removed("hello world"),
            AnnotatedLine::added("hello there"),
        ];
        let config = LayoutConfig::default();
        let doc = layout(&lines, &config, &Helvetica);

        assert_eq!(doc.page_count(), 1);
        let fragments = &doc.pages[0].fragments;
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].text, "hello world");
        assert_eq!(fragments[0].style, LineStyle::Removed);
        assert_eq!(fragments[0].x, config.left_margin);
        assert_eq!(fragments[0].y, config.top);
        assert_eq!(fragments[1].style, LineStyle::Added);
        assert_eq!(fragments[1].y, config.top - config.line_height);
    }

    #[test]
    fn test_wraps_at_content_width() {
        // "aaaa bbbb" is 9 wide, "aaaa bbbb cccc" is 14 wide
        let lines = vec![AnnotatedLine::unchanged("aaaa bbbb cccc dddd")];
        let doc = layout(&lines, &narrow_config(12.0), &Monospace);

        let texts: Vec<&str> = doc.fragments().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["aaaa bbbb", "cccc dddd"]);
    }

    #[test]
    fn test_lines_never_exceed_content_width() {
        let config = LayoutConfig::default();
        let paragraph = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
            eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim \
            veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo \
            consequat. WWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWW";
        let lines: Vec<AnnotatedLine> = (0..20)
            .map(|i| AnnotatedLine::new(paragraph, [LineStyle::Unchanged, LineStyle::Added][i % 2]))
            .collect();

        let doc = layout(&lines, &config, &Helvetica);
        assert!(doc.fragments().count() > lines.len());
        for fragment in doc.fragments() {
            let width = Helvetica.width(&fragment.text, config.font_size);
            assert!(
                width < config.content_width,
                "fragment {:?} is {} wide",
                fragment.text,
                width
            );
        }
    }

    #[test]
    fn test_wide_glyphs_stay_inside_content_width() {
        let config = LayoutConfig::default();
        // An em dash is a full em, so at 12pt at most 41 fit below 500pt
        let max_dashes = (config.content_width / config.font_size).ceil() as usize - 1;
        let lines = vec![
            AnnotatedLine::unchanged("\u{2014}".repeat(200)),
            AnnotatedLine::added(
                "\u{201C}Quoted\u{201D} text\u{2026} \u{00A9} \u{2122} \u{2014} \u{00C6}sthetic \u{0152}uvre \u{2030} "
                    .repeat(20),
            ),
        ];
        let doc = layout(&lines, &config, &Helvetica);

        for fragment in doc.fragments() {
            let width = Helvetica.width(&fragment.text, config.font_size);
            assert!(width < config.content_width, "{:?} is {} wide", fragment.text, width);
            assert!(fragment.x + width < config.page_width);
        }

        let dash_runs: Vec<usize> = doc
            .fragments()
            .filter(|f| f.style == LineStyle::Unchanged)
            .map(|f| f.text.chars().count())
            .collect();
        assert!(dash_runs.iter().all(|&n| n <= max_dashes), "{dash_runs:?}");
        assert_eq!(dash_runs.iter().sum::<usize>(), 200);
    }

    #[test]
    fn test_every_word_is_drawn() {
        let lines = vec![
            AnnotatedLine::unchanged("the  quick brown   fox"),
            AnnotatedLine::removed("jumps over the lazy dog"),
            AnnotatedLine::added(""),
            AnnotatedLine::added("and runs away"),
        ];
        let doc = layout(&lines, &narrow_config(10.0), &Monospace);

        let drawn = words_of(doc.fragments().map(|f| f.text.as_str()));
        let expected = words_of(lines.iter().map(|l| l.content.as_str()));
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_overlong_word_is_hard_broken() {
        let lines = vec![AnnotatedLine::unchanged("ab abcdefghijkl cd")];
        let doc = layout(&lines, &narrow_config(5.0), &Monospace);

        let texts: Vec<&str> = doc.fragments().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["ab", "abcd", "efgh", "ijkl", "cd"]);
        assert_eq!(texts[1..4].concat(), "abcdefghijkl");
    }

    #[test]
    fn test_fragment_keeps_line_style() {
        let lines = vec![
            AnnotatedLine::unchanged("same"),
            AnnotatedLine::removed("gone gone gone"),
        ];
        let doc = layout(&lines, &narrow_config(10.0), &Monospace);

        let styles: Vec<LineStyle> = doc.fragments().map(|f| f.style).collect();
        assert_eq!(
            styles,
            vec![LineStyle::Unchanged, LineStyle::Removed, LineStyle::Removed]
        );
    }

    #[test]
    fn test_page_break_when_cursor_passes_bottom() {
        let config = LayoutConfig::default();
        // Baselines run 750, 736, ..., 22: 53 lines per page
        let per_page = ((config.top - config.bottom()) / config.line_height) as usize + 1;
        assert_eq!(per_page, 53);

        let one_page: Vec<AnnotatedLine> = (0..per_page)
            .map(|i| AnnotatedLine::unchanged(format!("line {i}")))
            .collect();
        assert_eq!(layout(&one_page, &config, &Helvetica).page_count(), 1);

        let overflow: Vec<AnnotatedLine> = (0..=per_page)
            .map(|i| AnnotatedLine::unchanged(format!("line {i}")))
            .collect();
        let doc = layout(&overflow, &config, &Helvetica);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[0].fragments.len(), per_page);
        assert_eq!(doc.pages[1].fragments.len(), 1);
        assert_eq!(doc.pages[1].fragments[0].y, config.top);
        assert_eq!(doc.pages[1].fragments[0].text, format!("line {per_page}"));
    }

    #[test]
    fn test_no_fragment_below_bottom_margin() {
        let config = LayoutConfig::default();
        let lines: Vec<AnnotatedLine> = (0..500)
            .map(|i| AnnotatedLine::added(format!("row {i}")))
            .collect();
        let doc = layout(&lines, &config, &Helvetica);

        assert!(doc.page_count() >= 2);
        assert!(doc.fragments().all(|f| f.y >= config.bottom() && f.y <= config.top));
        assert_eq!(doc.fragments().count(), 500);
    }

    #[test]
    fn test_empty_input_yields_single_blank_page() {
        let doc = layout(&[], &LayoutConfig::default(), &Helvetica);
        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages[0].fragments.is_empty());
    }
}
