//! Configuration management for PDF Diff Server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::compare::DEFAULT_EXTRACT_TIMEOUT_SECS;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub extract: ExtractConfig,
    pub layout: LayoutConfig,
    pub archive: ArchiveConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body in bytes
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Upper bound for extracting text from a single upload
    pub timeout_secs: u64,
}

/// Page geometry and typography for the comparison document.
///
/// All lengths are PDF points (1/72 inch), with the origin at the
/// bottom-left corner of the page.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    /// Maximum width of a drawn line
    pub content_width: f32,
    /// Baseline of the first line on every page
    pub top: f32,
    pub line_height: f32,
    pub left_margin: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArchiveConfig {
    /// When set, each comparison result is also written to `<dir>/<uuid>.pdf`
    pub dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                max_upload_bytes: 64 * 1024 * 1024,
            },
            extract: ExtractConfig {
                timeout_secs: DEFAULT_EXTRACT_TIMEOUT_SECS,
            },
            layout: LayoutConfig::default(),
            archive: ArchiveConfig::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page_width: 612.0,
            page_height: 792.0,
            content_width: 500.0,
            top: 750.0,
            line_height: 14.0,
            left_margin: 40.0,
            font_size: 12.0,
        }
    }
}

impl LayoutConfig {
    /// The cursor may not fall below this baseline before a page break
    pub fn bottom(&self) -> f32 {
        self.line_height
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let layout = defaults.layout;

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var("SERVER_PORT", defaults.server.port)?,
                max_upload_bytes: parse_var("MAX_UPLOAD_BYTES", defaults.server.max_upload_bytes)?,
            },
            extract: ExtractConfig {
                timeout_secs: parse_var("EXTRACT_TIMEOUT_SECS", defaults.extract.timeout_secs)?,
            },
            layout: LayoutConfig {
                content_width: parse_var("PAGE_CONTENT_WIDTH", layout.content_width)?,
                top: parse_var("PAGE_TOP", layout.top)?,
                line_height: parse_var("LINE_HEIGHT", layout.line_height)?,
                left_margin: parse_var("LEFT_MARGIN", layout.left_margin)?,
                font_size: parse_var("FONT_SIZE", layout.font_size)?,
                ..layout
            },
            archive: ArchiveConfig {
                dir: env::var("ARCHIVE_DIR")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
                    .map(PathBuf::from),
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}
