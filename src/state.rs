//! Application state management

use std::sync::Arc;

use crate::compare::Comparer;
use crate::config::Config;
use crate::extract::{MupdfExtractor, TextExtractor};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    comparer: Comparer,
}

impl AppState {
    /// Create application state backed by the MuPDF extractor
    pub fn new(config: Config) -> Self {
        Self::with_extractor(config, Arc::new(MupdfExtractor))
    }

    /// Create application state with a custom text extractor
    pub fn with_extractor(config: Config, extractor: Arc<dyn TextExtractor>) -> Self {
        let comparer = Comparer::new(extractor, config.layout.clone())
            .with_archive_dir(config.archive.dir.clone())
            .with_extract_timeout(config.extract.timeout_secs);

        Self {
            inner: Arc::new(AppStateInner { config, comparer }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the comparison pipeline
    pub fn comparer(&self) -> &Comparer {
        &self.inner.comparer
    }
}
