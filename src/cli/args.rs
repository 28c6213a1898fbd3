//! Command-line argument definitions for the gSTORE organizer
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::{DEFAULT_PROCESS_NAME, TABLE_FILE_NAME};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the gSTORE organizer
///
/// Converts gPROMS gSTORE-4 simulation result files (flat colon-delimited
/// variable listings) into a hierarchical directory-of-CSV representation
/// mirroring the plant's equipment naming hierarchy, and back again.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gstore-organizer",
    version,
    about = "Convert gPROMS gSTORE-4 result files to a directory hierarchy and back",
    long_about = "Converts gPROMS gSTORE-4 simulation result files (flat colon-delimited \
                  variable listings) into a hierarchical directory of variables.csv tables \
                  mirroring the plant's equipment naming hierarchy, and reconstructs flat \
                  files from such a hierarchy with full numeric round-trip fidelity."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the gSTORE organizer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Organize a flat result file into a directory hierarchy
    Organize(OrganizeArgs),
    /// Reconstruct a flat result file from an organized hierarchy
    Reconstruct(ReconstructArgs),
    /// Organize every flat result file found under a directory
    Batch(BatchArgs),
    /// Look up variables in a flat result file by path prefix
    Query(QueryArgs),
}

/// Arguments for the organize command
#[derive(Debug, Clone, Parser)]
pub struct OrganizeArgs {
    /// Input flat result file (gSTORE-4 format)
    ///
    /// If not specified, the path is prompted for interactively.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input flat result file (gSTORE-4 format)"
    )]
    pub input_path: Option<PathBuf>,

    /// Output root for the organized hierarchy
    ///
    /// Created if it doesn't exist. Defaults to an organized_output
    /// directory next to the input file.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output root directory for the organized hierarchy"
    )]
    pub output_path: Option<PathBuf>,

    /// Only organize variables whose dotted path starts with this prefix
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "PREFIX",
        help = "Only organize variables whose dotted path starts with PREFIX"
    )]
    pub prefix: Option<String>,

    /// File name used for the per-container table
    #[arg(
        long = "table-name",
        value_name = "NAME",
        default_value = TABLE_FILE_NAME,
        help = "File name used for each container table"
    )]
    pub table_name: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for machine-readable results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the reconstruct command
#[derive(Debug, Clone, Parser)]
pub struct ReconstructArgs {
    /// Root of a previously organized hierarchy
    ///
    /// If not specified, the path is prompted for interactively.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Root directory of an organized hierarchy"
    )]
    pub input_path: Option<PathBuf>,

    /// Output flat file path
    ///
    /// Defaults to reconstructed.txt next to the input root.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output flat result file"
    )]
    pub output_path: Option<PathBuf>,

    /// Process name written into the gSTORE-4 header
    #[arg(
        long = "process-name",
        value_name = "NAME",
        default_value = DEFAULT_PROCESS_NAME,
        help = "Process name written into the file header"
    )]
    pub process_name: String,

    /// Line ordering policy for the reconstructed file
    #[arg(
        long = "order",
        value_enum,
        default_value = "traversal",
        help = "Line ordering for the output (traversal or hierarchical)"
    )]
    pub order: OrderPolicy,

    /// Reference file pinning the output line order
    ///
    /// Either an existing gSTORE-4 file or a bare one-path-per-line list.
    /// Paths named in the file come first, in file order; unknown paths
    /// follow alphabetically.
    #[arg(
        long = "order-file",
        value_name = "FILE",
        conflicts_with = "order",
        help = "Reference file pinning the output line order"
    )]
    pub order_file: Option<PathBuf>,

    /// File name used for the per-container table
    #[arg(
        long = "table-name",
        value_name = "NAME",
        default_value = TABLE_FILE_NAME,
        help = "File name used for each container table"
    )]
    pub table_name: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for machine-readable results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the batch command
#[derive(Debug, Clone, Parser)]
pub struct BatchArgs {
    /// Directory searched recursively for flat result files
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Directory searched recursively for .txt result files"
    )]
    pub input_path: PathBuf,

    /// Output root; one subdirectory is created per input file
    ///
    /// Defaults to organized_output under the input directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output root, one subdirectory per input file"
    )]
    pub output_path: Option<PathBuf>,

    /// Only organize variables whose dotted path starts with this prefix
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "PREFIX",
        help = "Only organize variables whose dotted path starts with PREFIX"
    )]
    pub prefix: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for machine-readable results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the batch summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// Input flat result file (gSTORE-4 format)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input flat result file (gSTORE-4 format)"
    )]
    pub input_path: PathBuf,

    /// Dotted path prefix to look up
    #[arg(value_name = "PREFIX", help = "Dotted path prefix to look up")]
    pub prefix: String,

    /// Stop after the first match
    #[arg(long = "first", help = "Print only the first matching variable")]
    pub first: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Output format for machine-readable results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the matches"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Line ordering policies for reconstructed flat files
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OrderPolicy {
    /// Keep the hierarchy reader's deterministic traversal order
    Traversal,
    /// Sort by path depth, then segment-by-segment alphabetically
    Hierarchical,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl OrganizeArgs {
    /// Validate the organize command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input_path.display()
                )));
            }
            if input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory, expected a flat result file: {}",
                    input_path.display()
                )));
            }
        }

        if self.table_name.is_empty() || self.table_name.contains('/') {
            return Err(Error::configuration(format!(
                "Invalid table file name: '{}'",
                self.table_name
            )));
        }

        if let Some(prefix) = &self.prefix {
            if prefix.is_empty() {
                return Err(Error::configuration(
                    "Path prefix cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ReconstructArgs {
    /// Validate the reconstruct command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }
            if !input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is not a directory: {}",
                    input_path.display()
                )));
            }
        }

        if let Some(order_file) = &self.order_file {
            if !order_file.exists() {
                return Err(Error::configuration(format!(
                    "Order file does not exist: {}",
                    order_file.display()
                )));
            }
        }

        if self.process_name.is_empty() {
            return Err(Error::configuration(
                "Process name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl BatchArgs {
    /// Validate the batch command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input directory does not exist: {}",
                self.input_path.display()
            )));
        }
        if !self.input_path.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                self.input_path.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl QueryArgs {
    /// Validate the query command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }
        if self.prefix.is_empty() {
            return Err(Error::configuration(
                "Query prefix cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn organize_args() -> OrganizeArgs {
        OrganizeArgs {
            input_path: None,
            output_path: None,
            prefix: None,
            table_name: TABLE_FILE_NAME.to_string(),
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }

    #[test]
    fn test_organize_args_validation() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "Plant.x : 1.0 : : : notype :\n").unwrap();

        let mut args = organize_args();
        args.input_path = Some(temp.path().to_path_buf());
        assert!(args.validate().is_ok());

        // Missing input file
        let mut invalid = organize_args();
        invalid.input_path = Some(PathBuf::from("/nonexistent/run_1.txt"));
        assert!(invalid.validate().is_err());

        // Directory given as input file
        let temp_dir = TempDir::new().unwrap();
        let mut invalid = organize_args();
        invalid.input_path = Some(temp_dir.path().to_path_buf());
        assert!(invalid.validate().is_err());

        // Invalid table name
        let mut invalid = organize_args();
        invalid.table_name = "a/b.csv".to_string();
        assert!(invalid.validate().is_err());

        // Empty prefix
        let mut invalid = organize_args();
        invalid.prefix = Some(String::new());
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_reconstruct_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let mut args = ReconstructArgs {
            input_path: Some(temp_dir.path().to_path_buf()),
            output_path: None,
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            order: OrderPolicy::Traversal,
            order_file: None,
            table_name: TABLE_FILE_NAME.to_string(),
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        };
        assert!(args.validate().is_ok());

        args.order_file = Some(PathBuf::from("/nonexistent/order.txt"));
        assert!(args.validate().is_err());

        args.order_file = None;
        args.process_name = String::new();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_batch_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let args = BatchArgs {
            input_path: temp_dir.path().to_path_buf(),
            output_path: None,
            prefix: None,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        };
        assert!(args.validate().is_ok());

        let invalid = BatchArgs {
            input_path: PathBuf::from("/nonexistent/trials"),
            ..args
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = organize_args();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
