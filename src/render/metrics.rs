//! Font metrics for line-width measurement

/// Measures the advance width of a string at a given font size
pub trait TextMeasure {
    /// Width of `text` in points when set at `font_size`
    fn width(&self, text: &str, font_size: f32) -> f32;
}

/// Advance widths of the base-14 Helvetica font.
///
/// Values are in 1/1000 em, taken from the Adobe Helvetica AFM, and match
/// what PDF viewers use when drawing the non-embedded base font.
#[derive(Debug, Clone, Copy, Default)]
pub struct Helvetica;

/// Widths for U+0020 through U+007E
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Widths for U+00A0 through U+00FF (WinAnsi 0xA0..0xFF)
const LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // nbsp..macron
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // degree..questiondown
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // Agrave..Idieresis
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // Eth..germandbls
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // agrave..idieresis
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // eth..ydieresis
];

/// Characters outside WinAnsi; measured as the widest glyph in the font
/// so a line never draws wider than it was measured.
const FALLBACK_WIDTH: u16 = 1015;

impl Helvetica {
    /// Advance width of a single character in 1/1000 em
    pub fn char_width(c: char) -> u16 {
        match c {
            ' '..='~' => ASCII_WIDTHS[c as usize - 0x20],
            '\u{00A0}'..='\u{00FF}' => LATIN1_WIDTHS[c as usize - 0xA0],
            _ => winansi_extra_width(c).unwrap_or(FALLBACK_WIDTH),
        }
    }
}

/// Widths of the WinAnsi 0x80..0x9F code points, keyed by Unicode
fn winansi_extra_width(c: char) -> Option<u16> {
    let width = match c {
        '\u{20AC}' => 556,  // Euro
        '\u{201A}' => 222,  // quotesinglbase
        '\u{0192}' => 556,  // florin
        '\u{201E}' => 333,  // quotedblbase
        '\u{2026}' => 1000, // ellipsis
        '\u{2020}' => 556,  // dagger
        '\u{2021}' => 556,  // daggerdbl
        '\u{02C6}' => 333,  // circumflex
        '\u{2030}' => 1000, // perthousand
        '\u{0160}' => 667,  // Scaron
        '\u{2039}' => 333,  // guilsinglleft
        '\u{0152}' => 1000, // OE
        '\u{017D}' => 611,  // Zcaron
        '\u{2018}' => 222,  // quoteleft
        '\u{2019}' => 222,  // quoteright
        '\u{201C}' => 333,  // quotedblleft
        '\u{201D}' => 333,  // quotedblright
        '\u{2022}' => 350,  // bullet
        '\u{2013}' => 556,  // endash
        '\u{2014}' => 1000, // emdash
        '\u{02DC}' => 333,  // tilde
        '\u{2122}' => 1000, // trademark
        '\u{0161}' => 500,  // scaron
        '\u{203A}' => 333,  // guilsinglright
        '\u{0153}' => 944,  // oe
        '\u{017E}' => 500,  // zcaron
        '\u{0178}' => 667,  // Ydieresis
        _ => return None,
    };
    Some(width)
}

impl TextMeasure for Helvetica {
    fn width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(Self::char_width(c))).sum();
        units as f32 * font_size / 1000.0
    }
}
