//! Serialization of variable records to gSTORE-4 text

use std::fs;
use std::path::Path;
use chrono::Local;
use tracing::debug;

use crate::app::models::VariableRecord;
use crate::constants::{
    COLUMN_LEGEND, DEFAULT_PROCESS_NAME, FIELD_SEPARATOR, GSTORE_SIGNATURE,
    HEADER_TIMESTAMP_FORMAT,
};
use crate::{Error, Result};

/// Writes variable records as a complete gSTORE-4 flat file
#[derive(Debug, Clone)]
pub struct FlatFileWriter {
    process_name: String,
}

impl Default for FlatFileWriter {
    fn default() -> Self {
        Self {
            process_name: DEFAULT_PROCESS_NAME.to_string(),
        }
    }
}

impl FlatFileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_process_name(mut self, name: impl Into<String>) -> Self {
        self.process_name = name.into();
        self
    }

    /// Write the records to `path`, stamping the header with the current
    /// local time. The record order is exactly the input order.
    pub fn write_file(&self, records: &[VariableRecord], path: &Path) -> Result<()> {
        let created_on = Local::now().format(HEADER_TIMESTAMP_FORMAT).to_string();
        let content = self.render(records, &created_on);
        fs::write(path, content)
            .map_err(|e| Error::io(format!("failed to write '{}'", path.display()), e))?;
        debug!("wrote {} records to '{}'", records.len(), path.display());
        Ok(())
    }

    /// Render the full file content with an explicit creation timestamp.
    /// Pure of I/O and the clock, so output is reproducible in tests.
    pub fn render(&self, records: &[VariableRecord], created_on: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} created on {}\n", GSTORE_SIGNATURE, created_on));
        out.push_str(&format!("# PROCESS {}\n", self.process_name));
        out.push('\n');
        out.push_str("!Time\n");
        out.push_str("\t0\n");
        out.push('\n');
        out.push_str("# The total number of variables in the process\n");
        out.push_str(&format!("# {}\n", records.len()));
        out.push_str("# Note: all variables are saved\n");
        out.push_str("!Variables\n");
        out.push_str(&format!("\t{}\n", COLUMN_LEGEND));
        for record in records {
            out.push('\t');
            out.push_str(&render_record(record));
            out.push('\n');
        }
        out
    }
}

/// Render one record line: six fields joined by the canonical ` : `
/// separator, absent numeric fields rendered as empty strings. A line
/// with empty units ends `: Type :` with no trailing space.
pub fn render_record(record: &VariableRecord) -> String {
    let head = [
        record.path.dotted(),
        record.value.format(),
        record.lower_bound.format(),
        record.upper_bound.format(),
        record.var_type.clone(),
    ]
    .join(FIELD_SEPARATOR);
    if record.units.is_empty() {
        format!("{} :", head)
    } else {
        format!("{}{}{}", head, FIELD_SEPARATOR, record.units)
    }
}
