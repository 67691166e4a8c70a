//! Line-level text diffing
//!
//! Turns two plain texts into a single ordered sequence of annotated lines,
//! each tagged as unchanged, removed or added. The sequence is consumed
//! directly by the layout stage; styling never travels as markup.

mod annotator;
mod lines;
mod types;

pub use annotator::{annotate, annotate_lines, similarity, SIMILARITY_CUTOFF};
pub use lines::split_lines;
pub use types::{AnnotatedLine, LineStyle};
