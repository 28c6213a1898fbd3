//! Configuration for organizer runs.
//!
//! Provides a configuration structure with sensible defaults and
//! builder-style overrides, threaded from the CLI into the services.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PROCESS_NAME, TABLE_FILE_NAME};

/// Global configuration for a conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizerConfig {
    /// Table file name written into (and expected in) every container directory
    pub table_file_name: String,

    /// Process name written into the reconstructed flat-file header
    pub process_name: String,

    /// Only organize variables whose dotted path starts with this prefix
    pub path_prefix: Option<String>,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            table_file_name: TABLE_FILE_NAME.to_string(),
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            path_prefix: None,
        }
    }
}

impl OrganizerConfig {
    /// Override the table file name
    pub fn with_table_file_name(mut self, name: impl Into<String>) -> Self {
        self.table_file_name = name.into();
        self
    }

    /// Override the header process name
    pub fn with_process_name(mut self, name: impl Into<String>) -> Self {
        self.process_name = name.into();
        self
    }

    /// Restrict organizing to one dotted-path prefix
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }
}
