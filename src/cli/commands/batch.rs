//! Batch command implementation
//!
//! Discovers every flat result file under an input directory and
//! organizes each into its own subtree of the output root. Runs are
//! independent: one failed file never aborts the batch.

use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::Result;
use crate::cli::args::{BatchArgs, OutputFormat};
use crate::cli::commands::organize::organize_run;
use crate::cli::commands::shared::{create_progress_bar, setup_logging};
use crate::config::OrganizerConfig;
use crate::constants::{DEFAULT_ORGANIZED_DIR_NAME, is_flat_file};

/// Summary of one batch run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub files_found: usize,
    pub runs_succeeded: usize,
    pub runs_failed: usize,
    pub records_organized: usize,
    pub failures: Vec<String>,
}

/// Execute the batch command
pub fn run_batch(args: BatchArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level(), args.quiet)?;

    let output_root = match &args.output_path {
        Some(path) => path.clone(),
        None => args.input_path.join(DEFAULT_ORGANIZED_DIR_NAME),
    };

    let mut config = OrganizerConfig::default();
    if let Some(prefix) = &args.prefix {
        config = config.with_path_prefix(prefix);
    }

    let files = discover_flat_files(&args.input_path, &output_root);
    info!(
        "Found {} flat result files under '{}'",
        files.len(),
        args.input_path.display()
    );

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(files.len() as u64, "organizing"));

    let mut summary = BatchSummary {
        files_found: files.len(),
        ..Default::default()
    };
    for file in &files {
        let run_output = output_root.join(run_name(file));
        match organize_run(file, &run_output, &config) {
            Ok(run) => {
                summary.runs_succeeded += 1;
                summary.records_organized += run.records_out;
            }
            Err(error) => {
                warn!("Run failed for '{}': {}", file.display(), error);
                summary.runs_failed += 1;
                summary
                    .failures
                    .push(format!("{}: {}", file.display(), error));
            }
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            if !args.quiet {
                println!();
                if summary.runs_failed == 0 {
                    println!("{}", "✓ Batch complete".green().bold());
                } else {
                    println!("{}", "⚠ Batch finished with failures".yellow().bold());
                }
                println!("  Files:      {}", summary.files_found);
                println!("  Succeeded:  {}", summary.runs_succeeded);
                println!("  Failed:     {}", summary.runs_failed);
                println!("  Variables:  {}", summary.records_organized);
                for failure in &summary.failures {
                    println!("  {} {}", "failed:".red(), failure);
                }
            }
        }
    }

    Ok(())
}

/// Find flat result files under `input`, in sorted order, skipping
/// anything already inside the output root
fn discover_flat_files(input: &Path, output_root: &Path) -> Vec<PathBuf> {
    WalkDir::new(input)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_flat_file(path))
        .filter(|path| !path.starts_with(output_root))
        .collect()
}

/// Output subdirectory name for one input file (its file stem)
fn run_name(file: &Path) -> String {
    file.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "run".to_string())
}
