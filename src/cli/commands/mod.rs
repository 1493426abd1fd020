//! Command implementations for the WorldBirds converter CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and summary output for the CLI interface. Each command is implemented
//! in its own module.

pub mod convert;
pub mod shared;
pub mod tables;

// Re-export the main types for convenience
pub use shared::RunSummary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the converter
///
/// Dispatches to the appropriate subcommand handler:
/// - `convert`: export conversion workflow
/// - `tables`: reference table analysis and reporting
pub fn run(args: Args) -> Result<RunSummary> {
    match args.get_command() {
        Commands::Convert(convert_args) => convert::run_convert(convert_args),
        Commands::Tables(tables_args) => tables::run_tables(tables_args),
    }
}
