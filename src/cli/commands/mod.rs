//! Command implementations for the gSTORE organizer CLI
//!
//! Each subcommand lives in its own module; shared reporting helpers
//! (logging setup, warning summaries, progress bars) live in `shared`.

pub mod batch;
pub mod organize;
pub mod query;
pub mod reconstruct;
pub mod shared;

pub use shared::RunSummary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the gSTORE organizer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `organize`: flat file to directory hierarchy
/// - `reconstruct`: directory hierarchy back to a flat file
/// - `batch`: organize every flat file under a directory
/// - `query`: look up variables in a flat file by path prefix
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Organize(organize_args) => organize::run_organize(organize_args),
        Commands::Reconstruct(reconstruct_args) => reconstruct::run_reconstruct(reconstruct_args),
        Commands::Batch(batch_args) => batch::run_batch(batch_args),
        Commands::Query(query_args) => query::run_query(query_args),
    }
}
