//! Line diff annotation
//!
//! Equal runs come from a Myers (LCS) diff over whole lines. Every region
//! where lines were replaced is then refined the way a classic `-`/`+`
//! line differ does it: the most similar old/new pair inside the region is
//! used as a synchronisation point and emitted as an adjacent
//! removed/added pair, and the regions on either side are refined
//! recursively. Regions without any sufficiently similar pair are dumped
//! as whole blocks.

use std::ops::Range;

use similar::{capture_diff_slices, Algorithm, DiffTag, TextDiff};

use super::lines::split_lines;
use super::types::{AnnotatedLine, LineStyle};

/// Minimum similarity for two lines to be paired inside a replaced region
pub const SIMILARITY_CUTOFF: f32 = 0.75;

/// Replaced regions with more candidate pairs than this are dumped as
/// plain blocks instead of being refined pair by pair.
const MAX_REFINE_PAIRS: usize = 10_000;

/// Diff two texts line by line.
pub fn annotate(old: &str, new: &str) -> Vec<AnnotatedLine> {
    annotate_lines(&split_lines(old), &split_lines(new))
}

/// Diff two pre-split line sequences.
pub fn annotate_lines<S: AsRef<str>>(old: &[S], new: &[S]) -> Vec<AnnotatedLine> {
    let old: Vec<&str> = old.iter().map(AsRef::as_ref).collect();
    let new: Vec<&str> = new.iter().map(AsRef::as_ref).collect();

    let mut refiner = Refiner {
        old: &old,
        new: &new,
        out: Vec::with_capacity(old.len().max(new.len())),
    };

    // Adjacent delete/insert/replace ops form one replaced region
    let mut pending: Option<(Range<usize>, Range<usize>)> = None;

    for op in capture_diff_slices(Algorithm::Myers, &old, &new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                if let Some((o, n)) = pending.take() {
                    refiner.region(o, n);
                }
                for line in &old[old_range] {
                    refiner.out.push(AnnotatedLine::unchanged(*line));
                }
            }
            DiffTag::Delete | DiffTag::Insert | DiffTag::Replace => {
                pending = Some(match pending.take() {
                    Some((o, n)) => (o.start..old_range.end, n.start..new_range.end),
                    None => (old_range, new_range),
                });
            }
        }
    }

    if let Some((o, n)) = pending {
        refiner.region(o, n);
    }

    refiner.out
}

/// Character-level similarity of two lines in `[0.0, 1.0]`.
///
/// Twice the number of matching characters divided by the total number
/// of characters in both lines.
pub fn similarity(a: &str, b: &str) -> f32 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    TextDiff::from_chars(a, b).ratio()
}

/// Cheap upper bound on [`similarity`] from the lengths alone
fn similarity_upper_bound(a: &str, b: &str) -> f32 {
    let (la, lb) = (a.chars().count(), b.chars().count());
    if la + lb == 0 {
        return 1.0;
    }
    2.0 * la.min(lb) as f32 / (la + lb) as f32
}

struct Refiner<'a> {
    old: &'a [&'a str],
    new: &'a [&'a str],
    out: Vec<AnnotatedLine>,
}

impl Refiner<'_> {
    /// Emit a region that may be empty on either side
    fn region(&mut self, old: Range<usize>, new: Range<usize>) {
        match (old.is_empty(), new.is_empty()) {
            (false, false) => self.replace(old, new),
            (false, true) => self.dump(LineStyle::Removed, old),
            (true, false) => self.dump(LineStyle::Added, new),
            (true, true) => {}
        }
    }

    /// Emit a region that is non-empty on both sides
    fn replace(&mut self, old: Range<usize>, new: Range<usize>) {
        if old.len() * new.len() > MAX_REFINE_PAIRS {
            return self.plain_replace(old, new);
        }

        let mut best_ratio = SIMILARITY_CUTOFF - 0.01;
        let mut best = None;
        let mut identical = None;

        for j in new.clone() {
            for i in old.clone() {
                let (a, b) = (self.old[i], self.new[j]);
                if a == b {
                    identical.get_or_insert((i, j));
                    continue;
                }
                if similarity_upper_bound(a, b) <= best_ratio {
                    continue;
                }
                let ratio = similarity(a, b);
                if ratio > best_ratio {
                    best_ratio = ratio;
                    best = Some((i, j));
                }
            }
        }

        let (i, j, same) = match (best, identical) {
            (Some((i, j)), _) if best_ratio >= SIMILARITY_CUTOFF => (i, j, false),
            (_, Some((i, j))) => (i, j, true),
            _ => return self.plain_replace(old, new),
        };

        self.region(old.start..i, new.start..j);
        if same {
            self.out.push(AnnotatedLine::unchanged(self.old[i]));
        } else {
            self.out.push(AnnotatedLine::removed(self.old[i]));
            self.out.push(AnnotatedLine::added(self.new[j]));
        }
        self.region(i + 1..old.end, j + 1..new.end);
    }

    /// Dump both sides as blocks; the shorter new side goes first
    fn plain_replace(&mut self, old: Range<usize>, new: Range<usize>) {
        if new.len() < old.len() {
            self.dump(LineStyle::Added, new);
            self.dump(LineStyle::Removed, old);
        } else {
            self.dump(LineStyle::Removed, old);
            self.dump(LineStyle::Added, new);
        }
    }

    fn dump(&mut self, style: LineStyle, range: Range<usize>) {
        let source = match style {
            LineStyle::Added => self.new,
            LineStyle::Removed | LineStyle::Unchanged => self.old,
        };
        self.out.extend(
            source[range]
                .iter()
                .map(|line| AnnotatedLine::new(*line, style)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn styles(lines: &[AnnotatedLine]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_whole_line_granularity() {
        let result = annotate("hello world", "hello there");
        assert_eq!(
            result,
            vec![
                AnnotatedLine::removed("hello world"),
                AnnotatedLine::added("hello there"),
            ]
        );
    }

    #[test]
    fn test_identical_texts_are_unchanged() {
        let text = "first line\nsecond line\nthird line";
        let result = annotate(text, text);
        assert!(result.iter().all(|l| l.style == LineStyle::Unchanged));
        let contents: Vec<&str> = result.iter().map(|l| l.content.as_str()).collect();
        assert_eq!(contents, split_lines(text));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(annotate("", "").is_empty());
        assert_eq!(annotate("", "a"), vec![AnnotatedLine::added("a")]);
        assert_eq!(annotate("a", ""), vec![AnnotatedLine::removed("a")]);
    }

    #[test]
    fn test_similar_lines_are_paired() {
        let result = annotate(
            "the quick brown fox\njumps over",
            "the quick brown fax\njumps over",
        );
        assert_eq!(
            styles(&result),
            vec!["- the quick brown fox", "+ the quick brown fax", "  jumps over"]
        );
    }

    #[test]
    fn test_replaced_region_is_interleaved() {
        let result = annotate(
            "intro\napple pie recipe\nbanana bread recipe\noutro",
            "intro\napple pie recipes\nbanana bread recipes\noutro",
        );
        assert_eq!(
            styles(&result),
            vec![
                "  intro",
                "- apple pie recipe",
                "+ apple pie recipes",
                "- banana bread recipe",
                "+ banana bread recipes",
                "  outro",
            ]
        );
    }

    #[test]
    fn test_plain_replace_puts_shorter_insert_first() {
        let result = annotate("one\ntwo", "zzz");
        assert_eq!(styles(&result), vec!["+ zzz", "- one", "- two"]);

        let result = annotate("x", "y\nw");
        assert_eq!(styles(&result), vec!["- x", "+ y", "+ w"]);
    }

    #[test]
    fn test_pure_insertions_and_deletions() {
        let result = annotate("a\nb\nc", "a\nc\nd");
        assert_eq!(styles(&result), vec!["  a", "- b", "  c", "+ d"]);
    }

    /// Swapping the inputs swaps removed and added for these texts, which
    /// have a single longest common subsequence. When several alignments
    /// tie (e.g. `"x\ny"` against `"y\nx"`) each direction may keep a
    /// different line unchanged, so this does not hold for every pair.
    #[test]
    fn test_reverse_diff_swaps_styles() {
        let a = "Title\nalpha beta\ngamma delta\nshared tail\nonly in a";
        let b = "Title\nalpha beta!\nbrand new line\nshared tail";

        let forward: BTreeSet<(String, LineStyle)> = annotate(a, b)
            .into_iter()
            .map(|l| (l.content, l.style))
            .collect();
        let backward: BTreeSet<(String, LineStyle)> = annotate(b, a)
            .into_iter()
            .map(|l| (l.content, l.style.inverted()))
            .collect();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_deterministic() {
        let a = "one\ntwo\nthree\nfour";
        let b = "zero\ntwo\nthree!\nfive";
        assert_eq!(annotate(a, b), annotate(a, b));
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert!(similarity("abcd", "abce") >= SIMILARITY_CUTOFF);
        assert!(similarity_upper_bound("a", "abcdefgh") < SIMILARITY_CUTOFF);
    }
}
