//! Application state for the Appraisal Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::records::RecordSource;

/// Shared application state.
///
/// Holds the loaded scoring configuration and the read-only record snapshot
/// that allocation runs read from.
#[derive(Clone)]
pub struct AppState {
    /// The loaded appraisal configuration.
    config: Arc<ConfigLoader>,
    /// The organization records.
    records: Arc<dyn RecordSource>,
}

impl AppState {
    /// Creates a new application state from a configuration and a record source.
    pub fn new(config: ConfigLoader, records: impl RecordSource + 'static) -> Self {
        Self {
            config: Arc::new(config),
            records: Arc::new(records),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the record source.
    pub fn records(&self) -> &dyn RecordSource {
        self.records.as_ref()
    }
}
