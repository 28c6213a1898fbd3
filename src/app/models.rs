//! Core data structures for gSTORE-4 processing.
//!
//! Defines the variable record and its hierarchical path, the
//! present/absent state of numeric fields, the derived directory tree,
//! and the taxonomy of recoverable warnings used throughout the library.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::constants::MANTISSA_DIGITS;
use crate::{Error, Result};

/// Format a number in normalized scientific notation with a 16-digit
/// mantissa and a signed, zero-padded exponent (`3.5000000000000000e+02`).
///
/// This is the single canonical numeric rendering for both the flat format
/// and container tables. Negative zero normalizes to the positive form.
pub fn format_scientific(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let raw = format!("{:.*e}", MANTISSA_DIGITS, value);
    // `{:e}` renders exponents without a sign or padding (`3.5e2`)
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            format!("{mantissa}e{exponent:+03}")
        }
        None => raw,
    }
}

/// A numeric field that is either a present decimal value or explicitly
/// absent. Absence is a first-class state distinct from zero: an empty
/// bound in the source file stays empty through every conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericField {
    Present(f64),
    Absent,
}

impl NumericField {
    /// Check whether the field carries no value
    pub fn is_absent(&self) -> bool {
        matches!(self, NumericField::Absent)
    }

    /// Get the value if present
    pub fn value(&self) -> Option<f64> {
        match self {
            NumericField::Present(v) => Some(*v),
            NumericField::Absent => None,
        }
    }

    /// Render the field for serialization: canonical scientific notation
    /// for present values, the empty string for absent ones
    pub fn format(&self) -> String {
        match self {
            NumericField::Present(v) => format_scientific(*v),
            NumericField::Absent => String::new(),
        }
    }
}

/// Identifies which numeric field of a record a warning refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Value,
    LowerBound,
    UpperBound,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordField::Value => "value",
            RecordField::LowerBound => "lower bound",
            RecordField::UpperBound => "upper bound",
        };
        write!(f, "{}", name)
    }
}

/// A hierarchical variable path: the dotted name of a variable split into
/// its non-empty segments (`Plant.Absorber.Stage(1).temperature`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariablePath {
    segments: Vec<String>,
}

impl VariablePath {
    /// Parse a dotted path name. Fails if the name is empty or any
    /// segment between dots is empty.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::empty_path(raw));
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(Error::empty_path(raw));
        }
        Ok(Self { segments })
    }

    /// Build a path from pre-split segments, with the same validation
    /// as [`VariablePath::parse`]
    pub fn from_segments(segments: Vec<String>) -> Result<Self> {
        if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return Err(Error::empty_path(segments.join(".")));
        }
        Ok(Self { segments })
    }

    /// All path segments in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Split into (container path, local name): every segment but the
    /// last names the container directory, the last is the variable's
    /// name within its table.
    pub fn split_container(&self) -> (&[String], &str) {
        let last = self.segments.len() - 1;
        let local = self.segments.last().map(String::as_str).unwrap_or_default();
        (&self.segments[..last], local)
    }

    /// The container path segments (all but the last)
    pub fn container(&self) -> &[String] {
        self.split_container().0
    }

    /// The variable's name within its container (the last segment)
    pub fn local_name(&self) -> &str {
        self.split_container().1
    }

    /// Whether the path is a single segment with no container
    pub fn is_bare(&self) -> bool {
        self.segments.len() == 1
    }

    /// The full dotted path name
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for VariablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dotted())
    }
}

/// One process variable: the atomic unit of both representations
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRecord {
    pub path: VariablePath,
    pub value: NumericField,
    pub lower_bound: NumericField,
    pub upper_bound: NumericField,
    pub var_type: String,
    pub units: String,
}

/// An ordered run of variable records sharing one container path.
/// Row order reflects first-seen source order, keeping tables diffable
/// against the flat file they came from.
#[derive(Debug, Clone, Default)]
pub struct ContainerTable {
    pub path: Vec<String>,
    pub records: Vec<VariableRecord>,
}

impl ContainerTable {
    pub fn new(path: Vec<String>) -> Self {
        Self {
            path,
            records: Vec::new(),
        }
    }

    /// Relative directory for this container under the output root
    pub fn relative_dir(&self) -> PathBuf {
        self.path.iter().collect()
    }

    /// The container path as a dotted prefix (empty for the root)
    pub fn dotted(&self) -> String {
        self.path.join(".")
    }

    /// Whether this is the implicit root container
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// A pure derived view grouping variable records by container path.
/// Containers appear in first-seen order; the tree holds no state beyond
/// what is recomputed from the flat record list.
#[derive(Debug, Clone, Default)]
pub struct DirectoryTree {
    containers: Vec<ContainerTable>,
    index: HashMap<String, usize>,
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its container's table, creating the container
    /// on first sight. Returns (container index, row index).
    pub fn insert(&mut self, record: VariableRecord) -> (usize, usize) {
        let key = record.path.container().join(".");
        let container = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.containers.len();
                self.containers
                    .push(ContainerTable::new(record.path.container().to_vec()));
                self.index.insert(key, idx);
                idx
            }
        };
        let table = &mut self.containers[container];
        table.records.push(record);
        (container, table.records.len() - 1)
    }

    /// Overwrite a previously inserted record in place, keeping its
    /// original position. Used for last-seen-wins duplicate handling.
    pub fn replace(&mut self, container: usize, row: usize, record: VariableRecord) {
        if let Some(slot) = self
            .containers
            .get_mut(container)
            .and_then(|table| table.records.get_mut(row))
        {
            *slot = record;
        }
    }

    /// All container tables in first-seen order
    pub fn containers(&self) -> &[ContainerTable] {
        &self.containers
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn record_count(&self) -> usize {
        self.containers.iter().map(|t| t.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

/// Recoverable conditions encountered while processing one run.
///
/// None of these abort the surrounding file: warnings are accumulated by
/// the stage that saw them and reported as a per-category summary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProcessingWarning {
    /// A flat-format line with delimiters but fewer than 6 fields
    #[error("line {line}: expected 6 fields, found {found}: '{raw}'")]
    MalformedLine {
        line: usize,
        found: usize,
        raw: String,
    },

    /// A flat-format line whose path field had an empty segment
    #[error("line {line}: invalid variable path '{raw}'")]
    EmptyPath { line: usize, raw: String },

    /// A numeric field that could not be parsed; the field is stored
    /// as absent and the record is still produced
    #[error("{path}: cannot parse {field} '{raw}' as a number")]
    NumericParse {
        path: String,
        field: RecordField,
        raw: String,
    },

    /// The same full path appeared more than once; the last value wins
    #[error("duplicate variable path '{path}': keeping the last value seen")]
    DuplicatePath { path: String },

    /// A single-segment path with no container; the variable is placed
    /// in the implicit root container
    #[error("variable '{name}' has no container: placed in the output root")]
    NoContainer { name: String },

    /// A container table row with fewer than two columns
    #[error("{file}:{line}: table row has too few columns: '{raw}'")]
    MalformedRow {
        file: PathBuf,
        line: usize,
        raw: String,
    },

    /// A leaf directory containing neither a table nor children
    #[error("empty container directory '{path}' holds no table")]
    EmptyContainer { path: PathBuf },
}

impl ProcessingWarning {
    /// Category label used for the end-of-run warning summary
    pub fn category(&self) -> &'static str {
        match self {
            ProcessingWarning::MalformedLine { .. } => "malformed lines",
            ProcessingWarning::EmptyPath { .. } => "invalid paths",
            ProcessingWarning::NumericParse { .. } => "numeric parse failures",
            ProcessingWarning::DuplicatePath { .. } => "duplicate paths",
            ProcessingWarning::NoContainer { .. } => "bare top-level variables",
            ProcessingWarning::MalformedRow { .. } => "malformed table rows",
            ProcessingWarning::EmptyContainer { .. } => "empty containers",
        }
    }
}
