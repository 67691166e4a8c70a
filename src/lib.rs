//! PDF Diff Server Library
//!
//! Compares the text of two PDF documents line by line and renders the
//! result as a new PDF with removed lines in red and added lines in green.
//!
//! # Modules
//!
//! - `extract`: PDF text extraction (MuPDF) and text normalization
//! - `diff`: Line-level diff annotation
//! - `render`: Word-wrapped, paginated PDF output
//! - `compare`: The per-request pipeline tying the three together
//! - `routes`: HTTP endpoints

pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod render;
pub mod routes;
pub mod state;
