//! Extracted text cleanup

/// Clean up a run of extracted text.
///
/// Non-breaking spaces and other whitespace become plain spaces,
/// non-printable characters are dropped, whitespace runs collapse to a
/// single space and the result is trimmed. Total and idempotent.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !is_printable(c) {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

/// Normalize every line of `text`, dropping lines left empty.
pub fn normalize_lines(text: &str) -> Vec<String> {
    crate::diff::split_lines(text)
        .into_iter()
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Control characters and invisible format characters are not printable
fn is_printable(c: char) -> bool {
    !c.is_control() && !is_format(c)
}

fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{061C}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
    )
}
