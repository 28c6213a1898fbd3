//! Output ordering policies for reconstructed flat files
//!
//! The default order is whatever the hierarchy reader produced (its
//! deterministic traversal). Two alternatives exist: a hierarchical sort,
//! and a reference order pinned by an existing gSTORE-4 file or a bare
//! path list.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::app::models::VariableRecord;
use crate::{Error, Result};

/// How reconstructed records are ordered before writing
#[derive(Debug, Clone, Default)]
pub enum OutputOrder {
    /// Keep the order the records arrived in
    #[default]
    Traversal,

    /// Sort by path depth, then segment-by-segment alphabetically
    Hierarchical,

    /// Follow a reference path list: paths named in the list first, in
    /// list order; paths the list does not know after, alphabetically
    Reference(Vec<String>),
}

impl OutputOrder {
    /// Load a reference order from a file: either a gSTORE-4 flat file
    /// (the path is the text before the first field separator) or a bare
    /// one-path-per-line list. Envelope lines are skipped.
    pub fn from_order_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read '{}'", path.display()), e))?;

        let mut paths = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let name = match line.split_once(" : ") {
                Some((name, _)) => name.trim(),
                None => line,
            };
            if !name.is_empty() {
                paths.push(name.to_string());
            }
        }

        debug!("loaded {} reference paths from '{}'", paths.len(), path.display());
        Ok(OutputOrder::Reference(paths))
    }

    /// Reorder the records in place according to this policy. All sorts
    /// are stable, so ties keep their incoming relative order.
    pub fn apply(&self, records: &mut [VariableRecord]) {
        match self {
            OutputOrder::Traversal => {}
            OutputOrder::Hierarchical => {
                records.sort_by_cached_key(|r| {
                    (r.path.segments().len(), r.path.segments().to_vec())
                });
            }
            OutputOrder::Reference(paths) => {
                let rank: HashMap<&str, usize> = paths
                    .iter()
                    .enumerate()
                    .map(|(idx, path)| (path.as_str(), idx))
                    .collect();
                records.sort_by_cached_key(|r| {
                    let dotted = r.path.dotted();
                    match rank.get(dotted.as_str()) {
                        Some(&idx) => (0usize, idx, String::new()),
                        None => (1, 0, dotted),
                    }
                });
            }
        }
    }
}
