//! Query command implementation
//!
//! Looks up variables in a flat result file by dotted-path prefix and
//! prints the matches, as record lines or as JSON.

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use crate::Result;
use crate::app::models::VariableRecord;
use crate::app::services::flat_parser::FlatFileParser;
use crate::app::services::flat_writer::render_record;
use crate::cli::args::{OutputFormat, QueryArgs};
use crate::cli::commands::shared::setup_logging;

/// One query match in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct QueryMatch {
    pub path: String,
    pub value: Option<f64>,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    pub var_type: String,
    pub units: String,
}

impl From<&VariableRecord> for QueryMatch {
    fn from(record: &VariableRecord) -> Self {
        Self {
            path: record.path.dotted(),
            value: record.value.value(),
            lower_bound: record.lower_bound.value(),
            upper_bound: record.upper_bound.value(),
            var_type: record.var_type.clone(),
            units: record.units.clone(),
        }
    }
}

/// Execute the query command
pub fn run_query(args: QueryArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level(), false)?;

    let parsed = FlatFileParser::new().parse_file(&args.input_path)?;
    let matches = find_matches(&parsed.records, &args.prefix, args.first);
    info!(
        "{} of {} variables match prefix '{}'",
        matches.len(),
        parsed.records.len(),
        args.prefix
    );

    match args.output_format {
        OutputFormat::Json => {
            let matches: Vec<QueryMatch> = matches.iter().map(|r| QueryMatch::from(*r)).collect();
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("{}", format!("No variables match '{}'", args.prefix).yellow());
            } else {
                for record in &matches {
                    println!("{}", render_record(record));
                }
            }
        }
    }

    Ok(())
}

/// Select records whose dotted path starts with the prefix, in file order
fn find_matches<'a>(
    records: &'a [VariableRecord],
    prefix: &str,
    first_only: bool,
) -> Vec<&'a VariableRecord> {
    let mut matches: Vec<&VariableRecord> = records
        .iter()
        .filter(|r| r.path.dotted().starts_with(prefix))
        .collect();
    if first_only {
        matches.truncate(1);
    }
    matches
}
