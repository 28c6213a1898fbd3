//! Organize command implementation
//!
//! Parses one flat result file, groups its variables by container path,
//! and materializes the hierarchy as nested `variables.csv` tables.

use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::Result;
use crate::app::models::ProcessingWarning;
use crate::app::services::flat_parser::FlatFileParser;
use crate::app::services::tree_builder::{HierarchyBuilder, TableWriter};
use crate::cli::args::{OrganizeArgs, OutputFormat};
use crate::cli::commands::shared::{
    RunSummary, print_warning_summary, setup_logging, warning_counts,
};
use crate::cli::input::prompt_existing_file;
use crate::config::OrganizerConfig;
use crate::constants::DEFAULT_ORGANIZED_DIR_NAME;

/// Execute the organize command
pub fn run_organize(args: OrganizeArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level(), args.quiet)?;

    let input = match &args.input_path {
        Some(path) => path.clone(),
        None => prompt_existing_file("Flat result file to organize")?,
    };
    let output = resolve_output_root(&input, args.output_path.as_deref());

    let mut config = OrganizerConfig::default().with_table_file_name(&args.table_name);
    if let Some(prefix) = &args.prefix {
        config = config.with_path_prefix(prefix);
    }

    let summary = organize_run(&input, &output, &config)?;

    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            if !args.quiet {
                println!();
                println!("{}", "✓ Organize complete".green().bold());
                println!("  Input:      {}", input.display());
                println!("  Output:     {}", output.display());
                println!("  Variables:  {}", summary.records_in);
                println!("  Tables:     {}", summary.tables);
                print_warning_summary(&summary.warnings);
            }
        }
    }

    Ok(())
}

/// Organize one flat file into one output root. Shared with the batch
/// command, which calls it once per discovered file.
pub fn organize_run(
    input: &Path,
    output_root: &Path,
    config: &OrganizerConfig,
) -> Result<RunSummary> {
    info!("Organizing '{}' into '{}'", input.display(), output_root.display());

    let parsed = FlatFileParser::new().parse_file(input)?;
    let mut records = parsed.records;
    if let Some(prefix) = &config.path_prefix {
        records.retain(|r| r.path.dotted().starts_with(prefix.as_str()));
        info!("{} records match prefix '{}'", records.len(), prefix);
    }
    let records_in = records.len();

    let built = HierarchyBuilder::new().build(records);
    let tables = TableWriter::new()
        .with_table_file_name(&config.table_file_name)
        .write_tree(&built.tree, output_root)?;

    let mut warnings: Vec<ProcessingWarning> = parsed.stats.warnings;
    warnings.extend(built.stats.warnings);

    Ok(RunSummary {
        records_in,
        records_out: built.stats.records_grouped,
        tables,
        warnings: warning_counts(&warnings),
    })
}

/// Default output root: an organized_output directory next to the input
pub fn resolve_output_root(input: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => match input.parent() {
            Some(parent) => parent.join(DEFAULT_ORGANIZED_DIR_NAME),
            None => PathBuf::from(DEFAULT_ORGANIZED_DIR_NAME),
        },
    }
}
