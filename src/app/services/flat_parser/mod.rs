//! Parser for gSTORE-4 flat result files
//!
//! This module reads a flat result file (one `PathName : Value :
//! LowerBound : UpperBound : Type : Units` record per line, wrapped in a
//! comment/section envelope) into structured variable records. The parser
//! is deliberately tolerant: a malformed line or unparseable numeric field
//! never aborts the rest of the file.
//!
//! ## Architecture
//!
//! - [`parser`] - Line and file level parsing
//! - [`field_parsers`] - Numeric field classification shared with the tree reader
//! - [`stats`] - Parsing statistics and result structures

pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::FlatFileParser;
pub use stats::{ParseResult, ParseStats};
