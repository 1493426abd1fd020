//! Reference table loading from delimited files
//!
//! Both tables are plain CSV with a header row naming the columns. Column
//! order is not significant; the loader resolves the columns it needs by
//! name and carries the rest of the row only where the entry models ask
//! for it. A table that cannot be opened or parsed fails the whole load:
//! converting with a partially loaded registry would silently mark every
//! missing entry as unmatched.

use super::ReferenceRegistry;
use super::metadata::LoadStats;
use crate::app::models::{LocationEntry, LocationKey, SpeciesEntry};
use crate::config::DatasetProfile;
use crate::constants::reference_columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl ReferenceRegistry {
    /// Load both reference tables for a dataset
    ///
    /// The dataset directory `<data_dir>/<dataset>` must contain the
    /// species and locations files named by the profile.
    ///
    /// # Errors
    /// * `Error::Registry` if the dataset directory doesn't exist
    /// * `Error::CsvParsing` for unreadable or malformed reference files
    pub fn load_for_dataset(
        data_dir: &Path,
        profile: &'static DatasetProfile,
    ) -> Result<(Self, LoadStats)> {
        info!(
            "Loading reference registry for dataset '{}' from {}",
            profile.name,
            data_dir.display()
        );

        let start_time = Instant::now();
        let dataset_dir = data_dir.join(profile.name);
        if !dataset_dir.exists() {
            return Err(Error::registry(format!(
                "Reference data directory does not exist: {}",
                dataset_dir.display()
            )));
        }

        let mut registry = Self::new(data_dir.to_path_buf(), profile.name);
        let mut stats = LoadStats::new();

        registry.load_species_file(&dataset_dir.join(profile.species_file), &mut stats)?;
        registry.load_locations_file(&dataset_dir.join(profile.locations_file), &mut stats)?;

        stats.species_loaded = registry.species_count();
        stats.locations_loaded = registry.location_count();
        stats.load_duration = start_time.elapsed();

        info!("{}", stats.summary());

        Ok((registry, stats))
    }

    /// Load the species table from a single CSV file
    ///
    /// Rows are keyed by the BirdLife common name; a later row with the
    /// same name overwrites the earlier one.
    pub fn load_species_file(&mut self, path: &Path, stats: &mut LoadStats) -> Result<()> {
        debug!("Loading species table: {}", path.display());

        let mut reader = open_reference_file(path)?;
        let headers = read_reference_headers(&mut reader, path)?;

        let birdlife_idx = column_index(&headers, reference_columns::BIRDLIFE_NAME, path)?;
        let ebird_idx = column_index(&headers, reference_columns::EBIRD_NAME, path)?;
        let scientific_idx = headers
            .iter()
            .position(|name| name == reference_columns::SCIENTIFIC_NAME);

        let mut record = StringRecord::new();
        while read_reference_record(&mut reader, &mut record, path)? {
            let birdlife_name = record.get(birdlife_idx).unwrap_or("").to_string();
            if birdlife_name.is_empty() {
                stats.rows_skipped += 1;
                continue;
            }

            let entry = SpeciesEntry {
                birdlife_name: birdlife_name.clone(),
                ebird_name: record.get(ebird_idx).unwrap_or("").to_string(),
                scientific_name: scientific_idx
                    .and_then(|idx| record.get(idx))
                    .filter(|name| !name.is_empty())
                    .map(str::to_string),
            };

            if self.species.insert(birdlife_name, entry).is_some() {
                stats.duplicate_keys += 1;
            }
        }

        stats.files_processed += 1;
        debug!(
            "Species table loaded: {} entries from {}",
            self.species.len(),
            path.display()
        );
        Ok(())
    }

    /// Load the locations table from a single CSV file
    ///
    /// Rows are keyed by the exact (location, latitude, longitude) string
    /// triple; a later row with the same triple overwrites the earlier one.
    pub fn load_locations_file(&mut self, path: &Path, stats: &mut LoadStats) -> Result<()> {
        debug!("Loading locations table: {}", path.display());

        let mut reader = open_reference_file(path)?;
        let headers = read_reference_headers(&mut reader, path)?;

        let name_idx = column_index(&headers, reference_columns::WORLDBIRDS_LOCATION, path)?;
        let lat_idx = column_index(&headers, reference_columns::WORLDBIRDS_LATITUDE, path)?;
        let lon_idx = column_index(&headers, reference_columns::WORLDBIRDS_LONGITUDE, path)?;
        let ebird_name_idx = column_index(&headers, reference_columns::EBIRD_LOCATION, path)?;
        let ebird_lat_idx = column_index(&headers, reference_columns::EBIRD_LATITUDE, path)?;
        let ebird_lon_idx = column_index(&headers, reference_columns::EBIRD_LONGITUDE, path)?;
        let region_idx = column_index(&headers, reference_columns::EBIRD_REGION_CODE, path)?;
        let country_idx = column_index(&headers, reference_columns::EBIRD_COUNTRY_CODE, path)?;

        let mut record = StringRecord::new();
        while read_reference_record(&mut reader, &mut record, path)? {
            let name = record.get(name_idx).unwrap_or("");
            if name.is_empty() {
                stats.rows_skipped += 1;
                continue;
            }

            let key = LocationKey::new(
                name,
                record.get(lat_idx).unwrap_or(""),
                record.get(lon_idx).unwrap_or(""),
            );
            let entry = LocationEntry {
                ebird_name: record.get(ebird_name_idx).unwrap_or("").to_string(),
                ebird_latitude: record.get(ebird_lat_idx).unwrap_or("").to_string(),
                ebird_longitude: record.get(ebird_lon_idx).unwrap_or("").to_string(),
                region_code: record.get(region_idx).unwrap_or("").to_string(),
                country_code: record.get(country_idx).unwrap_or("").to_string(),
            };

            if self.locations.insert(key, entry).is_some() {
                stats.duplicate_keys += 1;
            }
        }

        stats.files_processed += 1;
        debug!(
            "Locations table loaded: {} entries from {}",
            self.locations.len(),
            path.display()
        );
        Ok(())
    }
}

/// Open a reference CSV file with the shared reader settings
fn open_reference_file(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.to_string_lossy().to_string(),
                "Failed to open reference table".to_string(),
                Some(e),
            )
        })
}

/// Read the header row of a reference file
fn read_reference_headers(
    reader: &mut csv::Reader<std::fs::File>,
    path: &Path,
) -> Result<StringRecord> {
    reader
        .headers()
        .map(Clone::clone)
        .map_err(|e| {
            Error::csv_parsing(
                path.to_string_lossy().to_string(),
                "Failed to read reference table headers".to_string(),
                Some(e),
            )
        })
}

/// Read one data record from a reference file
fn read_reference_record(
    reader: &mut csv::Reader<std::fs::File>,
    record: &mut StringRecord,
    path: &Path,
) -> Result<bool> {
    reader.read_record(record).map_err(|e| {
        Error::csv_parsing(
            path.to_string_lossy().to_string(),
            "Failed to read reference table record".to_string(),
            Some(e),
        )
    })
}

/// Resolve a required column name to its index
fn column_index(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers.iter().position(|header| header == name).ok_or_else(|| {
        Error::csv_parsing(
            path.to_string_lossy().to_string(),
            format!("Required column '{}' not found", name),
            None,
        )
    })
}
