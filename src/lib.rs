//! gSTORE Organizer Library
//!
//! A Rust library for converting gPROMS gSTORE-4 simulation result files
//! (flat colon-delimited variable listings) into a hierarchical
//! directory-of-CSV representation that mirrors the plant's equipment
//! naming hierarchy, and back again.
//!
//! This library provides tools for:
//! - Parsing flat result files with tolerant per-line and per-field recovery
//! - Grouping variables into container tables by their dotted path hierarchy
//! - Materializing and re-reading the hierarchy with deterministic ordering
//! - Serializing variables back to the flat format with 16-digit precision
//! - Accumulating recoverable warnings instead of aborting on dirty data

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod flat_parser;
        pub mod flat_writer;
        pub mod tree_builder;
        pub mod tree_reader;

        #[cfg(test)]
        mod integration_test;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{DirectoryTree, NumericField, ProcessingWarning, VariablePath, VariableRecord};
pub use config::OrganizerConfig;

/// Result type alias for the gSTORE organizer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for organizer operations that are fatal to a single run
///
/// Recoverable conditions (malformed lines, unparseable numeric fields,
/// empty container directories) are not errors; they are accumulated as
/// [`app::models::ProcessingWarning`] values and reported in summaries.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file or directory does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: std::path::PathBuf },

    /// Expected a directory, found something else
    #[error("Not a directory: {path}")]
    NotADirectory { path: std::path::PathBuf },

    /// A variable path had no segments, or an empty segment
    #[error("Invalid variable path '{raw}': paths are non-empty dot-separated segments")]
    EmptyPath { raw: String },

    /// Configuration or argument validation error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization of a summary failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<std::path::PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a not-a-directory error
    pub fn not_a_directory(path: impl Into<std::path::PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create an empty-path error
    pub fn empty_path(raw: impl Into<String>) -> Self {
        Self::EmptyPath { raw: raw.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
