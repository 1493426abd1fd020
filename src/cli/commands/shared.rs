//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the CLI command implementations.

use crate::constants::EXPORT_EXTENSIONS;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Summary of a CLI run, reported across all commands
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of files processed
    pub files_processed: usize,
    /// Number of data rows read
    pub records_read: usize,
    /// Number of records written
    pub records_converted: usize,
    /// Number of records skipped by the best-effort policy
    pub records_skipped: usize,
    /// Converted records whose species had no reference-table match
    pub species_unmatched: usize,
    /// Converted records whose location had no reference-table match
    pub locations_unmatched: usize,
    /// Number of errors encountered
    pub errors_encountered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl RunSummary {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Number of converted records needing manual review before import
    pub fn needs_review(&self) -> usize {
        self.species_unmatched + self.locations_unmatched
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("worldbirds_converter={}", log_level)));

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

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Discover export files under an input directory
///
/// Any file with a recognised export extension counts; the export tool
/// names files inconsistently across WorldBirds versions.
pub fn discover_export_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut exports = Vec::new();

    for entry in WalkDir::new(input_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        if path.is_file()
            && EXPORT_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        {
            exports.push(path.to_path_buf());
        }
    }

    // Sort files for consistent processing order
    exports.sort();

    debug!(
        "Discovered {} export files in {}",
        exports.len(),
        input_dir.display()
    );

    Ok(exports)
}

/// Write a report to a file or stdout
pub fn emit_report(output_file: Option<&Path>, report: &str) -> Result<()> {
    match output_file {
        Some(path) => std::fs::write(path, report).map_err(|e| {
            Error::io(format!("Failed to write report to {}", path.display()), e)
        }),
        None => {
            println!("{}", report);
            Ok(())
        }
    }
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
