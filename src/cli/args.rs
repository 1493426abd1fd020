//! Command-line argument definitions for the WorldBirds converter
//!
//! This module defines the complete CLI interface using the clap derive
//! API, along with argument validation shared by the command handlers.

use crate::config::{Config, ConvertMode, dataset_profile};
use crate::constants::{DATASET_NAMES, DEFAULT_DATASET};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the WorldBirds to eBird converter
///
/// Converts bird observation records exported from the WorldBirds
/// citizen-science platform into the CSV import format accepted by eBird.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "worldbirds-converter",
    version,
    about = "Convert WorldBirds exports into the eBird CSV import format",
    long_about = "Converts bird observation records exported from the WorldBirds \
                  citizen-science platform into the comma-separated import format \
                  accepted by eBird, translating species and location names through \
                  per-dataset reference tables and reformatting dates, times, and \
                  counts along the way."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the converter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert one export file, or every export in a directory
    Convert(ConvertArgs),
    /// Report on the reference tables for a dataset
    Tables(TablesArgs),
}

/// Arguments for the convert command (main conversion workflow)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input WorldBirds export file, or a directory of exports
    ///
    /// Exports are the UTF-16 tab-separated files produced by the
    /// WorldBirds "export observations" tool.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input export file or directory of exports"
    )]
    pub input_path: PathBuf,

    /// Output eBird import file, or a directory for converted files
    ///
    /// When the input is a directory, one output file is written per
    /// export, named after the export's file stem.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output import file or directory"
    )]
    pub output_path: PathBuf,

    /// Source dataset the exports come from
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "NAME",
        default_value = DEFAULT_DATASET,
        help = "Source dataset the exports come from"
    )]
    pub dataset: String,

    /// Directory holding the reference tables
    ///
    /// Must contain one sub-directory per dataset with its species.csv and
    /// locations.csv. Defaults to the converter's platform data directory.
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        help = "Directory holding the per-dataset reference tables"
    )]
    pub data_dir: Option<PathBuf>,

    /// Keep converting after a record fails
    ///
    /// By default the first record that cannot be converted aborts the
    /// file with its row number. With this flag failing records are
    /// skipped, counted, and reported in the summary instead.
    #[arg(
        long = "best-effort",
        help = "Skip records that fail to convert instead of aborting"
    )]
    pub best_effort: bool,

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

    /// Output format for the run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the tables command (reference table reports)
#[derive(Debug, Clone, Parser)]
pub struct TablesArgs {
    /// Directory holding the reference tables
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        help = "Directory holding the per-dataset reference tables"
    )]
    pub data_dir: Option<PathBuf>,

    /// Dataset to report on
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "NAME",
        default_value = DEFAULT_DATASET,
        help = "Dataset to report on"
    )]
    pub dataset: String,

    /// Output format for the table report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the table report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the report
    ///
    /// If not specified, the report goes to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the report"
    )]
    pub output_file: Option<PathBuf>,

    /// Include full table listings
    ///
    /// By default the report shows summary counts only.
    #[arg(long = "detailed", help = "Include full table listings in the report")]
    pub detailed: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input_path.display()
            )));
        }

        if dataset_profile(&self.dataset).is_none() {
            return Err(Error::configuration(format!(
                "Unknown dataset '{}'. Available datasets: {}",
                self.dataset,
                DATASET_NAMES.join(", ")
            )));
        }

        if let Some(data_dir) = &self.data_dir {
            if !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Reference data directory does not exist: {}",
                    data_dir.display()
                )));
            }
        }

        if self.input_path.is_dir() && self.output_path.is_file() {
            return Err(Error::configuration(
                "Output must be a directory when the input is a directory".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the run configuration from the arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::default()
            .with_dataset(self.dataset.clone())
            .with_mode(self.mode());
        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir.clone());
        }
        config
    }

    /// The failure policy selected by the flags
    pub fn mode(&self) -> ConvertMode {
        if self.best_effort {
            ConvertMode::BestEffort
        } else {
            ConvertMode::Strict
        }
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

impl TablesArgs {
    /// Validate the tables command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if dataset_profile(&self.dataset).is_none() {
            return Err(Error::configuration(format!(
                "Unknown dataset '{}'. Available datasets: {}",
                self.dataset,
                DATASET_NAMES.join(", ")
            )));
        }

        if let Some(data_dir) = &self.data_dir {
            if !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Reference data directory does not exist: {}",
                    data_dir.display()
                )));
            }
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Build the run configuration from the arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::default().with_dataset(self.dataset.clone());
        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir.clone());
        }
        config
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
