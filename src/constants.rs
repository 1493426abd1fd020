//! Application constants for the WorldBirds converter
//!
//! This module contains the fixed source and target schemas, reference-table
//! column names, and format strings used throughout the converter.

// =============================================================================
// Target Schema (eBird import format)
// =============================================================================

/// Column order of the eBird CSV import format
///
/// Import files carry no header row; eBird identifies fields purely by
/// position, so this order is a contract.
pub const EBIRD_HEADERS: &[&str] = &[
    "Common Name",
    "Genus",
    "Species",
    "Number",
    "Species Comments",
    "Location Name",
    "Latitude",
    "Longitude",
    "Date",
    "Start Time",
    "State/Province",
    "Country Code",
    "Protocol",
    "Number of Observers",
    "Duration",
    "All observations reported?",
    "Effort Distance Miles",
    "Effort area acres",
    "Submission Comments",
];

// =============================================================================
// Source Schema (WorldBirds export format)
// =============================================================================

/// Column names of the known WorldBirds export layout
///
/// Data rows additionally carry a leading row-number column that is not
/// named in the header.
pub const WORLDBIRDS_HEADERS: &[&str] = &[
    "Family name",
    "Family sequence",
    "Species sequence",
    "Scientific name",
    "Common name",
    "BirdLife common name",
    "Location",
    "Region/State",
    "Location area",
    "Minimum Altitude",
    "Maximum Altitude",
    "Latitude",
    "Longitude",
    "Location notes",
    "WBDB code",
    "Location is IBA",
    "Location can have subunits",
    "Location is private",
    "Location validated",
    "Location accuracy",
    "Visit date",
    "Start time",
    "End time",
    "Timebirding",
    "Number of observers",
    "Visit notes",
    "Number",
    "Activity",
    "Purpose",
    "Duplicate",
    "Observation is private",
    "Status",
    "Validation notes",
    "All birds recorded?",
    "Poor conditions",
    "Visit species notes",
    "Location ID",
    "Visit ID",
    "Visit Species ID",
];

/// Line marking the end of the metadata block (matched case-insensitively)
pub const DATA_SENTINEL: &str = "data";

/// Source field names consumed by the record conversion
pub mod source_fields {
    pub const BIRDLIFE_NAME: &str = "BirdLife common name";
    pub const LOCATION: &str = "Location";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const VISIT_DATE: &str = "Visit date";
    pub const START_TIME: &str = "Start time";
    pub const END_TIME: &str = "End time";
    pub const OBSERVER_COUNT: &str = "Number of observers";
    pub const COUNT: &str = "Number";
    pub const SPECIES_NOTES: &str = "Visit species notes";
    pub const VISIT_NOTES: &str = "Visit notes";
    pub const ALL_RECORDED: &str = "All birds recorded?";
}

// =============================================================================
// Reference Tables
// =============================================================================

/// Supported dataset names
pub const DATASET_NAMES: &[&str] = &["portugalaves"];

/// Dataset used when none is specified
pub const DEFAULT_DATASET: &str = "portugalaves";

/// Species table file name within a dataset directory
pub const SPECIES_FILE_NAME: &str = "species.csv";

/// Locations table file name within a dataset directory
pub const LOCATIONS_FILE_NAME: &str = "locations.csv";

/// Column names of the reference table files
pub mod reference_columns {
    // species.csv
    pub const SCIENTIFIC_NAME: &str = "Scientific name";
    pub const BIRDLIFE_NAME: &str = "BirdLife common name";
    pub const EBIRD_NAME: &str = "eBird Common Name";

    // locations.csv
    pub const WORLDBIRDS_LOCATION: &str = "Worldbirds Location";
    pub const WORLDBIRDS_LATITUDE: &str = "Worldbirds Latitude";
    pub const WORLDBIRDS_LONGITUDE: &str = "Worldbirds Longitude";
    pub const EBIRD_LOCATION: &str = "eBird Location";
    pub const EBIRD_LATITUDE: &str = "eBird Latitude";
    pub const EBIRD_LONGITUDE: &str = "eBird Longitude";
    pub const EBIRD_REGION_CODE: &str = "eBird Region Code";
    pub const EBIRD_COUNTRY_CODE: &str = "eBird Country Code";
}

// =============================================================================
// Field Conversion
// =============================================================================

/// Date format used by WorldBirds exports
pub const WORLDBIRDS_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format expected by the eBird import
pub const EBIRD_DATE_FORMAT: &str = "%m/%d/%Y";

/// 24-hour time format shared by both platforms
pub const TIME_FORMAT: &str = "%H:%M";

/// Source count marker meaning "seen but not counted"
pub const COUNT_PRESENT_MARKER: &str = "present";

/// eBird spelling of an unspecified count
pub const COUNT_UNSPECIFIED: &str = "X";

// =============================================================================
// File Discovery
// =============================================================================

/// File extensions recognised as WorldBirds exports
pub const EXPORT_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];
