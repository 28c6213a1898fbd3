//! Shared components for CLI commands
//!
//! This module contains the run summary type and the reporting helpers
//! used across the organize, reconstruct, batch, and query commands.

use crate::Result;
use crate::app::models::ProcessingWarning;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Summary of one conversion run, reported in human or JSON form
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Records parsed or read from the input
    pub records_in: usize,
    /// Records written to the output
    pub records_out: usize,
    /// Container tables written or read
    pub tables: usize,
    /// Warning counts keyed by category
    pub warnings: BTreeMap<String, usize>,
}

impl RunSummary {
    /// Total number of warnings across all categories
    pub fn warning_count(&self) -> usize {
        self.warnings.values().sum()
    }
}

/// Set up structured logging to stderr at the given level
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gstore_organizer={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Count warnings by category label
pub fn warning_counts(warnings: &[ProcessingWarning]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for warning in warnings {
        *counts.entry(warning.category().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Print the end-of-run warning summary, counts by category
pub fn print_warning_summary(counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    let total: usize = counts.values().sum();
    println!();
    println!("{}", format!("⚠ {} warnings:", total).yellow().bold());
    for (category, count) in counts {
        println!("  {:>6}  {}", count, category);
    }
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_counts_by_category() {
        let warnings = vec![
            ProcessingWarning::DuplicatePath {
                path: "Plant.x".to_string(),
            },
            ProcessingWarning::DuplicatePath {
                path: "Plant.y".to_string(),
            },
            ProcessingWarning::NoContainer {
                name: "Hold_up".to_string(),
            },
        ];

        let counts = warning_counts(&warnings);
        assert_eq!(counts.get("duplicate paths"), Some(&2));
        assert_eq!(counts.get("bare top-level variables"), Some(&1));
    }

    #[test]
    fn test_run_summary_warning_count() {
        let mut summary = RunSummary::default();
        summary.warnings.insert("duplicate paths".to_string(), 2);
        summary.warnings.insert("malformed lines".to_string(), 1);
        assert_eq!(summary.warning_count(), 3);
    }

    #[test]
    fn test_run_summary_serializes_to_json() {
        let summary = RunSummary {
            records_in: 6,
            records_out: 6,
            tables: 5,
            warnings: BTreeMap::new(),
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"records_in\":6"));
        assert!(json.contains("\"tables\":5"));
    }
}
