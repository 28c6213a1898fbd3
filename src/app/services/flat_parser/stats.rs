//! Parsing statistics and result structures for flat-file processing

use serde::Serialize;

use crate::app::models::{ProcessingWarning, VariableRecord};

/// Parsing result with records and accumulated statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed variable records, in source file order
    pub records: Vec<VariableRecord>,

    /// Parsing statistics and warnings
    pub stats: ParseStats,
}

/// Per-file parsing statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseStats {
    /// Total number of lines read, including envelope lines
    pub lines_read: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of candidate record lines skipped as malformed
    pub lines_skipped: usize,

    /// Recoverable warnings recorded while parsing
    #[serde(skip)]
    pub warnings: Vec<ProcessingWarning>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recoverable warning
    pub fn push(&mut self, warning: ProcessingWarning) {
        tracing::debug!("{}", warning);
        self.warnings.push(warning);
    }

    /// Number of warnings recorded
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
