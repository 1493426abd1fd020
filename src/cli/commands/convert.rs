//! Convert command implementation
//!
//! Runs the conversion workflow: load the reference registry, resolve the
//! input/output file pairs, convert each export, and report a summary.

use super::shared::{RunSummary, create_progress_bar, discover_export_files, setup_logging};
use crate::app::services::file_converter::FileConverter;
use crate::app::services::reference_registry::ReferenceRegistry;
use crate::cli::args::{ConvertArgs, OutputFormat};
use crate::config::ConvertMode;
use crate::{Error, Result};
use colored::Colorize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert command runner
pub fn run_convert(args: ConvertArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    info!("Starting WorldBirds conversion");
    debug!("Convert arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    config.validate()?;
    let profile = config.profile()?;

    let (registry, _load_stats) = ReferenceRegistry::load_for_dataset(&config.data_dir, profile)?;

    let jobs = resolve_jobs(&args.input_path, &args.output_path)?;
    info!("{} file(s) to convert", jobs.len());

    let converter = FileConverter::new(Arc::new(registry), profile, config.mode);

    let progress = (jobs.len() > 1 && args.show_progress())
        .then(|| create_progress_bar(jobs.len() as u64, "Converting exports"));

    let mut summary = RunSummary::default();
    for (input, output) in &jobs {
        if let Some(pb) = &progress {
            pb.set_message(format!(
                "Converting {}",
                input.file_name().unwrap_or_default().to_string_lossy()
            ));
        }

        match converter.convert_file(input, output) {
            Ok(stats) => {
                summary.files_processed += 1;
                summary.records_read += stats.records_read;
                summary.records_converted += stats.records_converted;
                summary.records_skipped += stats.records_skipped;
                summary.species_unmatched += stats.species_unmatched;
                summary.locations_unmatched += stats.locations_unmatched;
                summary.errors_encountered += stats.errors.len();

                if stats.records_converted > 0 {
                    if let Ok(metadata) = std::fs::metadata(output) {
                        summary
                            .output_sizes
                            .push((output.display().to_string(), metadata.len()));
                    }
                }
            }
            Err(e) => match config.mode {
                ConvertMode::Strict => return Err(e),
                ConvertMode::BestEffort => {
                    warn!("Failed to convert {}: {}", input.display(), e);
                    summary.errors_encountered += 1;
                }
            },
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_with_message("Conversion complete");
    }

    summary.processing_time = start_time.elapsed();
    report_summary(&args, &summary);

    Ok(summary)
}

/// Resolve the input/output file pairs for a run
///
/// A file input converts to exactly the output path (or into it, when the
/// output is an existing directory). A directory input converts every
/// discovered export into the output directory, one file per export named
/// after its stem. The converter refuses to overwrite its own input.
fn resolve_jobs(input: &Path, output: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut jobs = Vec::new();

    if input.is_dir() {
        let exports = discover_export_files(input)?;
        if exports.is_empty() {
            return Err(Error::configuration(format!(
                "No export files found in {}",
                input.display()
            )));
        }

        std::fs::create_dir_all(output).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", output.display()),
                e,
            )
        })?;

        for export in exports {
            let destination = output.join(output_name(&export));
            jobs.push((export, destination));
        }
    } else {
        let destination = if output.is_dir() {
            output.join(output_name(input))
        } else {
            output.to_path_buf()
        };
        jobs.push((input.to_path_buf(), destination));
    }

    for (export, destination) in &jobs {
        if export == destination {
            return Err(Error::configuration(format!(
                "Output would overwrite the input file: {}",
                export.display()
            )));
        }
    }

    Ok(jobs)
}

/// Output file name for an export
fn output_name(export: &Path) -> PathBuf {
    let stem = export
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    PathBuf::from(format!("{}.csv", stem))
}

/// Print the run summary in the requested format
fn report_summary(args: &ConvertArgs, summary: &RunSummary) {
    match args.output_format {
        OutputFormat::Human => report_human_summary(args, summary),
        OutputFormat::Json => report_json_summary(summary),
    }
}

/// Human-readable end-of-run summary
fn report_human_summary(args: &ConvertArgs, summary: &RunSummary) {
    if args.quiet {
        return;
    }

    println!();
    println!("{}", "Conversion summary".bold());
    println!("  Files processed:   {}", summary.files_processed);
    println!("  Records read:      {}", summary.records_read);
    println!(
        "  Records converted: {}",
        summary.records_converted.to_string().green()
    );

    if summary.records_skipped > 0 {
        println!(
            "  Records skipped:   {}",
            summary.records_skipped.to_string().red()
        );
    }

    if summary.needs_review() > 0 {
        println!(
            "  Needing review:    {} ({} species, {} locations unmatched)",
            summary.needs_review().to_string().yellow(),
            summary.species_unmatched,
            summary.locations_unmatched
        );
    }

    println!(
        "  Elapsed:           {:.2}s",
        summary.processing_time.as_secs_f64()
    );

    for (file, size) in &summary.output_sizes {
        println!("  Wrote {} ({})", file, RunSummary::format_size(*size));
    }

    if summary.files_processed > 0 && summary.output_sizes.is_empty() {
        println!("  No output written (nothing to convert)");
    }
}

/// JSON end-of-run summary for scripting
fn report_json_summary(summary: &RunSummary) {
    let report = json!({
        "files_processed": summary.files_processed,
        "records_read": summary.records_read,
        "records_converted": summary.records_converted,
        "records_skipped": summary.records_skipped,
        "needs_review": {
            "species_unmatched": summary.species_unmatched,
            "locations_unmatched": summary.locations_unmatched,
        },
        "errors_encountered": summary.errors_encountered,
        "processing_time_seconds": summary.processing_time.as_secs_f64(),
        "outputs": summary
            .output_sizes
            .iter()
            .map(|(file, size)| json!({"file": file, "size_bytes": size}))
            .collect::<Vec<_>>(),
    });

    // to_string_pretty on a json! literal cannot fail
    println!(
        "{}",
        serde_json::to_string_pretty(&report).unwrap_or_default()
    );
}
