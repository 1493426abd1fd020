//! Data models for WorldBirds conversion
//!
//! This module contains the core data structures for representing source
//! records read from a WorldBirds export, converted eBird records, and the
//! reference-table entries used to translate between the two platforms.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Reference Table Entries
// =============================================================================

/// Species reference entry mapping a BirdLife common name to eBird's
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    /// Common name used by WorldBirds (BirdLife taxonomy)
    pub birdlife_name: String,

    /// Equivalent common name in the eBird taxonomy
    pub ebird_name: String,

    /// Scientific name carried through from the reference file (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
}

/// Key identifying a source location
///
/// Keys are compared as exact strings with no numeric normalization, so
/// "1.1" and "1.10" are distinct latitudes. This matches how the reference
/// tables are maintained: entries are copied verbatim from the export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationKey {
    /// Location name as exported by WorldBirds
    pub name: String,

    /// Latitude string as exported by WorldBirds
    pub latitude: String,

    /// Longitude string as exported by WorldBirds
    pub longitude: String,
}

impl LocationKey {
    /// Create a location key from the exact source strings
    pub fn new(
        name: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// Location reference entry with the eBird-side replacement values
///
/// An entry with an empty `ebird_name` maps only the region and country
/// codes; the source name and coordinates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Location name registered in eBird
    pub ebird_name: String,

    /// Latitude of the eBird location
    pub ebird_latitude: String,

    /// Longitude of the eBird location
    pub ebird_longitude: String,

    /// eBird state/province code (e.g. "PT-15")
    pub region_code: String,

    /// eBird country code (e.g. "PT")
    pub country_code: String,
}

// =============================================================================
// Source Record
// =============================================================================

/// One data row from a WorldBirds export
///
/// Field values are keyed by the column names from the export's header row.
/// The row number is the raw first token of the line, written by the export
/// tool; it is kept purely as an opaque identifier for diagnostics and is
/// never parsed.
#[derive(Debug, Clone, Default)]
pub struct SourceRecord {
    row_number: String,
    fields: HashMap<String, String>,
}

impl SourceRecord {
    /// Create an empty record identified by its row number
    pub fn new(row_number: impl Into<String>) -> Self {
        Self {
            row_number: row_number.into(),
            fields: HashMap::new(),
        }
    }

    /// The record's opaque row number
    pub fn row_number(&self) -> &str {
        &self.row_number
    }

    /// Set a field value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Get a required field value, failing with the record's row number
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| {
            Error::record_format(
                self.row_number.clone(),
                format!("missing required field '{}'", name),
            )
        })
    }

    /// Number of named fields (the row number is not counted)
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no named fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// =============================================================================
// Converted Record
// =============================================================================

/// A record in the eBird import format
///
/// One field per column of the import schema, all values kept as strings.
/// [`EbirdRecord::as_row`] returns the values in serialization order, so a
/// row can never be written with a column missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EbirdRecord {
    pub common_name: String,
    pub genus: String,
    pub species: String,
    pub number: String,
    pub species_comments: String,
    pub location_name: String,
    pub latitude: String,
    pub longitude: String,
    pub date: String,
    pub start_time: String,
    pub state_province: String,
    pub country_code: String,
    pub protocol: String,
    pub number_of_observers: String,
    pub duration: String,
    pub all_observations_reported: String,
    pub effort_distance_miles: String,
    pub effort_area_acres: String,
    pub submission_comments: String,
}

impl EbirdRecord {
    /// Field values in the column order of
    /// [`EBIRD_HEADERS`](crate::constants::EBIRD_HEADERS)
    pub fn as_row(&self) -> [&str; 19] {
        [
            &self.common_name,
            &self.genus,
            &self.species,
            &self.number,
            &self.species_comments,
            &self.location_name,
            &self.latitude,
            &self.longitude,
            &self.date,
            &self.start_time,
            &self.state_province,
            &self.country_code,
            &self.protocol,
            &self.number_of_observers,
            &self.duration,
            &self.all_observations_reported,
            &self.effort_distance_miles,
            &self.effort_area_acres,
            &self.submission_comments,
        ]
    }
}

/// Conversion result for one source record
///
/// The audit flags record whether the species and location had a
/// reference-table match. They feed the needs-review counts in the run
/// statistics and are dropped when the record is serialized.
#[derive(Debug, Clone)]
pub struct ConvertedRecord {
    /// The complete eBird record
    pub record: EbirdRecord,

    /// The species name was found in the species table
    pub species_converted: bool,

    /// The location triple was found in the locations table
    pub location_converted: bool,
}
