//! Grouping of variable records into a directory tree

use std::collections::HashMap;
use tracing::debug;

use crate::app::models::{DirectoryTree, ProcessingWarning, VariableRecord};

/// Builds a directory tree from an ordered list of variable records
#[derive(Debug, Default)]
pub struct HierarchyBuilder;

/// Build outcome: the derived tree plus grouping statistics
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub tree: DirectoryTree,
    pub stats: BuildStats,
}

/// Grouping statistics for one build
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Records grouped into the tree, duplicates counted once
    pub records_grouped: usize,

    /// Number of distinct containers in the tree
    pub containers: usize,

    /// Recoverable warnings recorded while grouping
    pub warnings: Vec<ProcessingWarning>,
}

impl BuildStats {
    fn push(&mut self, warning: ProcessingWarning) {
        tracing::debug!("{}", warning);
        self.warnings.push(warning);
    }
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Group records by container path, preserving first-seen order of
    /// local names within each container.
    ///
    /// Duplicate full paths resolve last-seen-wins: the later value
    /// replaces the earlier one in place, so the record keeps its original
    /// position. Single-segment paths land in the implicit root container;
    /// both cases are recorded as data-quality warnings.
    pub fn build(&self, records: Vec<VariableRecord>) -> BuildResult {
        let mut tree = DirectoryTree::new();
        let mut stats = BuildStats::default();
        let mut seen: HashMap<String, (usize, usize)> = HashMap::new();

        for record in records {
            if record.path.is_bare() {
                stats.push(ProcessingWarning::NoContainer {
                    name: record.path.dotted(),
                });
            }
            let key = record.path.dotted();
            match seen.get(&key) {
                Some(&(container, row)) => {
                    stats.push(ProcessingWarning::DuplicatePath { path: key });
                    tree.replace(container, row, record);
                }
                None => {
                    let position = tree.insert(record);
                    seen.insert(key, position);
                }
            }
        }

        stats.records_grouped = tree.record_count();
        stats.containers = tree.container_count();
        debug!(
            "grouped {} records into {} containers ({} warnings)",
            stats.records_grouped,
            stats.containers,
            stats.warnings.len()
        );

        BuildResult { tree, stats }
    }
}
