//! Line-oriented parsing of gSTORE-4 flat result files

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use super::field_parsers::{NumericParse, classify_numeric};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{
    NumericField, ProcessingWarning, RecordField, VariablePath, VariableRecord,
};
use crate::constants::FLAT_FIELD_COUNT;
use crate::{Error, Result};

/// Parser for flat result files
#[derive(Debug, Default)]
pub struct FlatFileParser;

impl FlatFileParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an entire flat file into variable records.
    ///
    /// Envelope lines (comments starting with `#`, section markers starting
    /// with `!`, the bare time value, blank lines) are skipped silently.
    /// Malformed record lines and unparseable numeric fields are recorded
    /// as warnings; neither aborts the file.
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        let file = File::open(path)
            .map_err(|e| Error::io(format!("failed to open '{}'", path.display()), e))?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        let mut stats = ParseStats::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line
                .map_err(|e| Error::io(format!("failed to read '{}'", path.display()), e))?;
            stats.lines_read += 1;
            if let Some(record) = self.parse_line(&line, idx + 1, &mut stats) {
                records.push(record);
            }
        }

        debug!(
            "parsed {} records from '{}' ({} lines, {} warnings)",
            records.len(),
            path.display(),
            stats.lines_read,
            stats.warning_count()
        );

        stats.records_parsed = records.len();
        Ok(ParseResult { records, stats })
    }

    /// Parse a single line into a record, or `None` for envelope lines and
    /// lines skipped with a warning
    pub fn parse_line(
        &self,
        line: &str,
        line_no: usize,
        stats: &mut ParseStats,
    ) -> Option<VariableRecord> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            return None;
        }
        if !line.contains(':') {
            // Section payload, such as the value under `!Time`
            return None;
        }

        let fields: Vec<&str> = line
            .splitn(FLAT_FIELD_COUNT, ':')
            .map(str::trim)
            .collect();
        if fields.len() < FLAT_FIELD_COUNT {
            stats.push(ProcessingWarning::MalformedLine {
                line: line_no,
                found: fields.len(),
                raw: line.to_string(),
            });
            stats.lines_skipped += 1;
            return None;
        }

        let path = match VariablePath::parse(fields[0]) {
            Ok(path) => path,
            Err(_) => {
                stats.push(ProcessingWarning::EmptyPath {
                    line: line_no,
                    raw: fields[0].to_string(),
                });
                stats.lines_skipped += 1;
                return None;
            }
        };

        let value = numeric_field(&path, RecordField::Value, fields[1], stats);
        let lower_bound = numeric_field(&path, RecordField::LowerBound, fields[2], stats);
        let upper_bound = numeric_field(&path, RecordField::UpperBound, fields[3], stats);

        Some(VariableRecord {
            path,
            value,
            lower_bound,
            upper_bound,
            var_type: fields[4].to_string(),
            units: fields[5].to_string(),
        })
    }
}

/// Interpret one numeric field, downgrading parse failures to an absent
/// value plus a warning so the rest of the record survives
fn numeric_field(
    path: &VariablePath,
    field: RecordField,
    raw: &str,
    stats: &mut ParseStats,
) -> NumericField {
    match classify_numeric(raw) {
        NumericParse::Value(value) => NumericField::Present(value),
        NumericParse::Empty => NumericField::Absent,
        NumericParse::Failed => {
            stats.push(ProcessingWarning::NumericParse {
                path: path.dotted(),
                field,
                raw: raw.to_string(),
            });
            NumericField::Absent
        }
    }
}
