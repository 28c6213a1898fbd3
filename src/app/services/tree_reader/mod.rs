//! Reader for organized variable hierarchies
//!
//! Walks a directory of container tables depth-first in a deterministic
//! order (each container's own table before its children, children sorted
//! by name) and reassembles the flat variable records, reattaching the
//! directory path as the dotted container prefix.

pub mod reader;
pub mod row_parser;

#[cfg(test)]
pub mod tests;

pub use reader::{HierarchyReader, ReadResult, ReadStats};
pub use row_parser::{RawRow, parse_row};
