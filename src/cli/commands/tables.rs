//! Tables command implementation
//!
//! Generates reference-table reports for a dataset: summary counts by
//! default, full listings with `--detailed`, in human or JSON form.

use super::shared::{RunSummary, emit_report, setup_logging};
use crate::app::services::reference_registry::{LoadStats, ReferenceRegistry};
use crate::cli::args::{OutputFormat, TablesArgs};
use crate::{Error, Result};
use serde_json::json;
use std::time::Instant;
use tracing::{debug, info};

/// Maximum entries shown per table in a detailed human report
const DETAILED_LISTING_LIMIT: usize = 50;

/// Tables command runner
pub fn run_tables(args: TablesArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    info!("Starting reference table report");
    debug!("Tables arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    config.validate()?;
    let profile = config.profile()?;

    let (registry, load_stats) = ReferenceRegistry::load_for_dataset(&config.data_dir, profile)?;

    let report = match args.output_format {
        OutputFormat::Human => human_report(&args, &registry, &load_stats),
        OutputFormat::Json => json_report(&args, &registry, &load_stats)?,
    };

    emit_report(args.output_file.as_deref(), &report)?;

    Ok(RunSummary {
        files_processed: load_stats.files_processed,
        errors_encountered: load_stats.errors.len(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}

/// Human-readable reference table report
fn human_report(args: &TablesArgs, registry: &ReferenceRegistry, load_stats: &LoadStats) -> String {
    let metadata = registry.metadata();

    let mut output = format!(
        "Reference tables for '{}'\n\
         =========================\n\
         Data directory: {}\n\
         Species:        {} entries\n\
         Locations:      {} entries\n\
         Load time:      {:.2}s\n",
        metadata.dataset,
        metadata.data_dir.display(),
        metadata.species_count,
        metadata.location_count,
        load_stats.load_duration.as_secs_f64()
    );

    if load_stats.duplicate_keys > 0 {
        output.push_str(&format!(
            "Duplicates:     {} keys overwritten (last row wins)\n",
            load_stats.duplicate_keys
        ));
    }

    if args.detailed {
        output.push_str("\nSpecies mappings:\n");
        let mut species: Vec<_> = registry.iter_species().collect();
        species.sort_by(|a, b| a.birdlife_name.cmp(&b.birdlife_name));

        for entry in species.iter().take(DETAILED_LISTING_LIMIT) {
            output.push_str(&format!(
                "  {} -> {}\n",
                entry.birdlife_name, entry.ebird_name
            ));
        }
        if species.len() > DETAILED_LISTING_LIMIT {
            output.push_str(&format!(
                "  ... and {} more species\n",
                species.len() - DETAILED_LISTING_LIMIT
            ));
        }

        output.push_str("\nLocation mappings:\n");
        let mut locations: Vec<_> = registry.iter_locations().collect();
        locations.sort_by(|a, b| a.0.name.cmp(&b.0.name));

        for (key, entry) in locations.iter().take(DETAILED_LISTING_LIMIT) {
            let target = if entry.ebird_name.is_empty() {
                format!("[codes only: {}/{}]", entry.region_code, entry.country_code)
            } else {
                entry.ebird_name.clone()
            };
            output.push_str(&format!(
                "  {} ({}, {}) -> {}\n",
                key.name, key.latitude, key.longitude, target
            ));
        }
        if locations.len() > DETAILED_LISTING_LIMIT {
            output.push_str(&format!(
                "  ... and {} more locations\n",
                locations.len() - DETAILED_LISTING_LIMIT
            ));
        }
    } else {
        output.push_str("\nUse --detailed for the full table listings\n");
    }

    output
}

/// JSON reference table report
fn json_report(
    args: &TablesArgs,
    registry: &ReferenceRegistry,
    load_stats: &LoadStats,
) -> Result<String> {
    let metadata = registry.metadata();

    let mut report = json!({
        "dataset": metadata.dataset,
        "data_dir": metadata.data_dir,
        "species_count": metadata.species_count,
        "location_count": metadata.location_count,
        "duplicate_keys": load_stats.duplicate_keys,
        "load_duration_seconds": load_stats.load_duration.as_secs_f64(),
    });

    if args.detailed {
        let mut species: Vec<_> = registry.iter_species().collect();
        species.sort_by(|a, b| a.birdlife_name.cmp(&b.birdlife_name));

        let mut locations: Vec<_> = registry.iter_locations().collect();
        locations.sort_by(|a, b| a.0.name.cmp(&b.0.name));

        report["species"] = json!(species);
        report["locations"] = json!(
            locations
                .iter()
                .map(|(key, entry)| json!({"key": key, "entry": entry}))
                .collect::<Vec<_>>()
        );
    }

    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::configuration(format!("Failed to serialize table report: {}", e)))
}
