//! Reconstruct command implementation
//!
//! Walks an organized hierarchy back into a flat record list and writes
//! it as a complete gSTORE-4 file.

use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::Result;
use crate::app::services::flat_writer::{FlatFileWriter, OutputOrder};
use crate::app::services::tree_reader::HierarchyReader;
use crate::cli::args::{OrderPolicy, OutputFormat, ReconstructArgs};
use crate::cli::commands::shared::{
    RunSummary, print_warning_summary, setup_logging, warning_counts,
};
use crate::cli::input::{prompt_confirmation, prompt_existing_dir};
use crate::constants::DEFAULT_RECONSTRUCTED_FILE_NAME;

/// Execute the reconstruct command
pub fn run_reconstruct(args: ReconstructArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level(), args.quiet)?;

    let input = match &args.input_path {
        Some(path) => path.clone(),
        None => prompt_existing_dir("Organized hierarchy root")?,
    };
    let output = resolve_output_file(&input, args.output_path.as_deref());

    // Only confirm overwrites for the implicit default path; an explicit
    // --output is taken as intent
    if args.output_path.is_none() && output.exists() {
        let message = format!("Overwrite existing '{}'?", output.display());
        if !prompt_confirmation(&message, true)? {
            println!("Reconstruction cancelled.");
            return Ok(());
        }
    }

    let order = match &args.order_file {
        Some(path) => OutputOrder::from_order_file(path)?,
        None => match args.order {
            OrderPolicy::Traversal => OutputOrder::Traversal,
            OrderPolicy::Hierarchical => OutputOrder::Hierarchical,
        },
    };

    info!(
        "Reconstructing '{}' from '{}'",
        output.display(),
        input.display()
    );

    let read = HierarchyReader::new()
        .with_table_file_name(&args.table_name)
        .read_tree(&input)?;
    let mut records = read.records;
    order.apply(&mut records);

    FlatFileWriter::new()
        .with_process_name(&args.process_name)
        .write_file(&records, &output)?;

    let summary = RunSummary {
        records_in: read.stats.records_read,
        records_out: records.len(),
        tables: read.stats.tables_read,
        warnings: warning_counts(&read.stats.warnings),
    };

    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            if !args.quiet {
                println!();
                println!("{}", "✓ Reconstruct complete".green().bold());
                println!("  Input:      {}", input.display());
                println!("  Output:     {}", output.display());
                println!("  Tables:     {}", summary.tables);
                println!("  Variables:  {}", summary.records_out);
                print_warning_summary(&summary.warnings);
            }
        }
    }

    Ok(())
}

/// Default output file: reconstructed.txt next to the hierarchy root
fn resolve_output_file(input: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => match input.parent() {
            Some(parent) => parent.join(DEFAULT_RECONSTRUCTED_FILE_NAME),
            None => PathBuf::from(DEFAULT_RECONSTRUCTED_FILE_NAME),
        },
    }
}
