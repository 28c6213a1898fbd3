//! Serialization of a directory tree to nested container tables

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::app::models::{ContainerTable, DirectoryTree, VariableRecord};
use crate::constants::TABLE_FILE_NAME;
use crate::{Error, Result};

/// Writes one fixed-schema table file into each container directory
#[derive(Debug, Clone)]
pub struct TableWriter {
    table_file_name: String,
}

impl Default for TableWriter {
    fn default() -> Self {
        Self {
            table_file_name: TABLE_FILE_NAME.to_string(),
        }
    }
}

impl TableWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table_file_name(mut self, name: impl Into<String>) -> Self {
        self.table_file_name = name.into();
        self
    }

    /// Materialize the tree under `root`, creating one directory per
    /// container and one table file per non-empty container. Existing
    /// table files are overwritten. Returns the number of tables written.
    pub fn write_tree(&self, tree: &DirectoryTree, root: &Path) -> Result<usize> {
        fs::create_dir_all(root)
            .map_err(|e| Error::io(format!("failed to create '{}'", root.display()), e))?;

        let mut tables_written = 0;
        for container in tree.containers() {
            if container.records.is_empty() {
                continue;
            }
            self.write_table(container, root)?;
            tables_written += 1;
        }

        debug!(
            "wrote {} tables under '{}'",
            tables_written,
            root.display()
        );
        Ok(tables_written)
    }

    fn write_table(&self, container: &ContainerTable, root: &Path) -> Result<()> {
        let dir = root.join(container.relative_dir());
        fs::create_dir_all(&dir)
            .map_err(|e| Error::io(format!("failed to create '{}'", dir.display()), e))?;

        let mut content = String::new();
        for record in &container.records {
            content.push_str(&format_table_row(record));
            content.push('\n');
        }

        let file = dir.join(&self.table_file_name);
        fs::write(&file, content)
            .map_err(|e| Error::io(format!("failed to write '{}'", file.display()), e))?;
        Ok(())
    }
}

/// Render one headerless table row: local name plus the five data columns,
/// absent numeric fields rendered as empty cells
pub fn format_table_row(record: &VariableRecord) -> String {
    format!(
        "{},{},{},{},{},{}",
        record.path.local_name(),
        record.value.format(),
        record.lower_bound.format(),
        record.upper_bound.format(),
        record.var_type,
        record.units
    )
}
