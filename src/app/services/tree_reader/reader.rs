//! Deterministic traversal of an organized hierarchy

use std::fs;
use std::path::Path;
use tracing::debug;

use super::row_parser::parse_row;
use crate::app::models::{
    NumericField, ProcessingWarning, RecordField, VariablePath, VariableRecord,
};
use crate::app::services::flat_parser::field_parsers::{NumericParse, classify_numeric};
use crate::constants::TABLE_FILE_NAME;
use crate::{Error, Result};

/// Reads container tables back into flat variable records
#[derive(Debug, Clone)]
pub struct HierarchyReader {
    table_file_name: String,
}

/// Read outcome: reassembled records plus traversal statistics
#[derive(Debug, Clone)]
pub struct ReadResult {
    pub records: Vec<VariableRecord>,
    pub stats: ReadStats,
}

/// Traversal statistics for one read
#[derive(Debug, Clone, Default)]
pub struct ReadStats {
    pub containers_visited: usize,
    pub tables_read: usize,
    pub records_read: usize,
    pub warnings: Vec<ProcessingWarning>,
}

impl ReadStats {
    fn push(&mut self, warning: ProcessingWarning) {
        tracing::debug!("{}", warning);
        self.warnings.push(warning);
    }
}

impl Default for HierarchyReader {
    fn default() -> Self {
        Self {
            table_file_name: TABLE_FILE_NAME.to_string(),
        }
    }
}

impl HierarchyReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table_file_name(mut self, name: impl Into<String>) -> Self {
        self.table_file_name = name.into();
        self
    }

    /// Walk the hierarchy rooted at `root` and reassemble its records.
    ///
    /// Traversal order is deterministic regardless of filesystem order:
    /// each container's own table is read before its children, and child
    /// directories are visited in ascending name order.
    pub fn read_tree(&self, root: &Path) -> Result<ReadResult> {
        if !root.exists() {
            return Err(Error::file_not_found(root));
        }
        if !root.is_dir() {
            return Err(Error::not_a_directory(root));
        }

        let mut records = Vec::new();
        let mut stats = ReadStats::default();
        let mut prefix = Vec::new();
        self.visit(root, &mut prefix, &mut records, &mut stats)?;

        stats.records_read = records.len();
        debug!(
            "read {} records from {} tables under '{}'",
            stats.records_read,
            stats.tables_read,
            root.display()
        );
        Ok(ReadResult { records, stats })
    }

    fn visit(
        &self,
        dir: &Path,
        prefix: &mut Vec<String>,
        records: &mut Vec<VariableRecord>,
        stats: &mut ReadStats,
    ) -> Result<()> {
        stats.containers_visited += 1;

        let table = dir.join(&self.table_file_name);
        let has_table = table.is_file();
        if has_table {
            self.read_table(&table, prefix, records, stats)?;
            stats.tables_read += 1;
        }

        let mut children: Vec<(String, std::path::PathBuf)> = Vec::new();
        let entries = fs::read_dir(dir)
            .map_err(|e| Error::io(format!("failed to read '{}'", dir.display()), e))?;
        for entry in entries {
            let entry = entry
                .map_err(|e| Error::io(format!("failed to read '{}'", dir.display()), e))?;
            let path = entry.path();
            if path.is_dir() {
                children.push((entry.file_name().to_string_lossy().into_owned(), path));
            }
        }
        children.sort_by(|a, b| a.0.cmp(&b.0));

        if !has_table && children.is_empty() {
            stats.push(ProcessingWarning::EmptyContainer {
                path: dir.to_path_buf(),
            });
            return Ok(());
        }

        for (name, path) in children {
            prefix.push(name);
            self.visit(&path, prefix, records, stats)?;
            prefix.pop();
        }
        Ok(())
    }

    fn read_table(
        &self,
        file: &Path,
        prefix: &[String],
        records: &mut Vec<VariableRecord>,
        stats: &mut ReadStats,
    ) -> Result<()> {
        let content = fs::read_to_string(file)
            .map_err(|e| Error::io(format!("failed to read '{}'", file.display()), e))?;

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some(row) = parse_row(line) else {
                stats.push(ProcessingWarning::MalformedRow {
                    file: file.to_path_buf(),
                    line: idx + 1,
                    raw: line.to_string(),
                });
                continue;
            };

            let mut segments = prefix.to_vec();
            segments.push(row.name.clone());
            let path = match VariablePath::from_segments(segments) {
                Ok(path) => path,
                Err(_) => {
                    stats.push(ProcessingWarning::MalformedRow {
                        file: file.to_path_buf(),
                        line: idx + 1,
                        raw: line.to_string(),
                    });
                    continue;
                }
            };

            let value = table_numeric(&path, RecordField::Value, &row.fields[0], stats);
            let lower_bound =
                table_numeric(&path, RecordField::LowerBound, &row.fields[1], stats);
            let upper_bound =
                table_numeric(&path, RecordField::UpperBound, &row.fields[2], stats);

            records.push(VariableRecord {
                path,
                value,
                lower_bound,
                upper_bound,
                var_type: row.fields[3].clone(),
                units: row.fields[4].clone(),
            });
        }
        Ok(())
    }
}

/// Interpret one numeric table cell, downgrading parse failures to an
/// absent value plus a warning
fn table_numeric(
    path: &VariablePath,
    field: RecordField,
    raw: &str,
    stats: &mut ReadStats,
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
