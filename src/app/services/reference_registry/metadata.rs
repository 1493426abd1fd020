//! Registry load statistics and metadata

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Statistics from loading the reference tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadStats {
    /// Number of species entries in the loaded table
    pub species_loaded: usize,

    /// Number of location entries in the loaded table
    pub locations_loaded: usize,

    /// Number of rows that overwrote an earlier row with the same key
    pub duplicate_keys: usize,

    /// Number of rows skipped for having an empty key
    pub rows_skipped: usize,

    /// Number of reference files processed
    pub files_processed: usize,

    /// Time taken to load both tables
    pub load_duration: Duration,

    /// Non-fatal problems encountered while loading
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any non-fatal problems were recorded
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} species and {} locations from {} files in {:.2}s ({} duplicate keys overwritten)",
            self.species_loaded,
            self.locations_loaded,
            self.files_processed,
            self.load_duration.as_secs_f64(),
            self.duplicate_keys
        )
    }
}

/// Snapshot of a registry's identity and size
#[derive(Debug, Clone)]
pub struct RegistryMetadata {
    /// Root of the reference-data directory
    pub data_dir: PathBuf,

    /// Dataset the registry was loaded for
    pub dataset: String,

    /// Number of species entries
    pub species_count: usize,

    /// Number of location entries
    pub location_count: usize,
}
