//! Configuration management and validation.
//!
//! Provides the conversion run configuration, the failure-policy mode, and
//! the static profiles describing each supported source dialect.

use crate::constants::{
    DATASET_NAMES, DATA_SENTINEL, DEFAULT_DATASET, LOCATIONS_FILE_NAME, SPECIES_FILE_NAME,
    WORLDBIRDS_HEADERS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Failure policy for the per-record conversion loop
///
/// Structural failures (unreadable file, missing data sentinel, bad header
/// row) abort the conversion in either mode before any output is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvertMode {
    /// Abort on the first record that fails to convert, reporting its row
    /// number
    #[default]
    Strict,
    /// Skip records that fail to convert, recording them in the statistics
    BestEffort,
}

/// Static description of a source dialect
///
/// Adding support for another WorldBirds deployment means adding a profile
/// and its reference tables; the conversion control flow stays the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetProfile {
    /// Dataset name, doubling as the reference-data sub-directory name
    pub name: &'static str,

    /// Line separating the export's metadata block from the data section
    pub data_sentinel: &'static str,

    /// Known export column layout, used to warn on deviating files
    pub source_headers: &'static [&'static str],

    /// Species table file name within the dataset directory
    pub species_file: &'static str,

    /// Locations table file name within the dataset directory
    pub locations_file: &'static str,
}

/// The PortugalAves deployment of WorldBirds
pub const PORTUGALAVES: DatasetProfile = DatasetProfile {
    name: "portugalaves",
    data_sentinel: DATA_SENTINEL,
    source_headers: WORLDBIRDS_HEADERS,
    species_file: SPECIES_FILE_NAME,
    locations_file: LOCATIONS_FILE_NAME,
};

/// Look up a dataset profile by name
pub fn dataset_profile(name: &str) -> Option<&'static DatasetProfile> {
    match name {
        "portugalaves" => Some(&PORTUGALAVES),
        _ => None,
    }
}

/// Configuration for a conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one sub-directory of reference tables per dataset
    pub data_dir: PathBuf,

    /// Source dialect the exports come from
    pub dataset: String,

    /// Failure policy for the per-record loop
    pub mode: ConvertMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            dataset: DEFAULT_DATASET.to_string(),
            mode: ConvertMode::default(),
        }
    }
}

impl Config {
    /// Create configuration with a custom reference-data directory
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Create configuration for a specific dataset
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }

    /// Create configuration with a specific failure policy
    pub fn with_mode(mut self, mode: ConvertMode) -> Self {
        self.mode = mode;
        self
    }

    /// Resolve the profile for the configured dataset
    pub fn profile(&self) -> Result<&'static DatasetProfile> {
        dataset_profile(&self.dataset).ok_or_else(|| {
            Error::configuration(format!(
                "Unknown dataset '{}'. Available datasets: {}",
                self.dataset,
                DATASET_NAMES.join(", ")
            ))
        })
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        let profile = self.profile()?;

        let dataset_dir = self.data_dir.join(profile.name);
        if !dataset_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Reference data directory does not exist: {}",
                dataset_dir.display()
            )));
        }

        Ok(())
    }
}

/// Default reference-data directory under the platform data directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("worldbirds-converter"))
        .unwrap_or_else(|| PathBuf::from("data"))
}
