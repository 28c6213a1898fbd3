//! Hierarchy builder for organized variable trees
//!
//! Groups parsed variable records by their container path (all dotted
//! segments but the last) into a [`crate::app::models::DirectoryTree`],
//! and materializes that tree as nested directories of fixed-schema
//! `variables.csv` tables.

pub mod builder;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use builder::{BuildResult, BuildStats, HierarchyBuilder};
pub use writer::{TableWriter, format_table_row};
