//! Tests for record conversion

pub mod species_tests;

use crate::app::models::{LocationEntry, LocationKey, SourceRecord, SpeciesEntry};
use crate::app::services::reference_registry::ReferenceRegistry;
use std::path::PathBuf;

/// Registry with one known species and two known locations
pub fn test_registry() -> ReferenceRegistry {
    let mut registry = ReferenceRegistry::new(PathBuf::from("/tmp/data"), "portugalaves");

    registry.add_species(SpeciesEntry {
        birdlife_name: "Azure-winged Magpie".to_string(),
        ebird_name: "Iberian Magpie".to_string(),
        scientific_name: Some("Cyanopica cyanus".to_string()),
    });

    registry.add_location(
        LocationKey::new("location a", "1.1", "1.1"),
        LocationEntry {
            ebird_name: "Location A".to_string(),
            ebird_latitude: "1.0000".to_string(),
            ebird_longitude: "1.0000".to_string(),
            region_code: "Region A".to_string(),
            country_code: "CC".to_string(),
        },
    );

    // Region-only entry: maps codes but names no eBird location
    registry.add_location(
        LocationKey::new("location b", "2.0001", "2.0001"),
        LocationEntry {
            ebird_name: String::new(),
            ebird_latitude: String::new(),
            ebird_longitude: String::new(),
            region_code: "Region B".to_string(),
            country_code: "CC".to_string(),
        },
    );

    registry
}

/// Complete source record with every field the conversion consumes
pub fn sample_record() -> SourceRecord {
    let mut record = SourceRecord::new("1");
    record.insert("BirdLife common name", "Azure-winged Magpie");
    record.insert("Location", "location a");
    record.insert("Latitude", "1.1");
    record.insert("Longitude", "1.1");
    record.insert("Visit date", "2024-05-01");
    record.insert("Start time", "09:00");
    record.insert("End time", "10:30");
    record.insert("Number of observers", "2");
    record.insert("Number", "3");
    record.insert("Visit species notes", "two juveniles");
    record.insert("Visit notes", "morning walk");
    record.insert("All birds recorded?", "true");
    record
}
