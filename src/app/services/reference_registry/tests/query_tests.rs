use crate::app::models::{LocationEntry, LocationKey, SpeciesEntry};
use crate::app::services::reference_registry::ReferenceRegistry;
use std::path::PathBuf;

fn test_registry() -> ReferenceRegistry {
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
    registry
}

#[test]
fn test_species_lookup() {
    let registry = test_registry();

    let entry = registry.lookup_species("Azure-winged Magpie").unwrap();
    assert_eq!(entry.ebird_name, "Iberian Magpie");

    assert!(registry.contains_species("Azure-winged Magpie"));
    assert!(!registry.contains_species("Dodo"));
    assert!(registry.lookup_species("Dodo").is_none());
}

#[test]
fn test_location_lookup_uses_exact_strings() {
    let registry = test_registry();

    let key = LocationKey::new("location a", "1.1", "1.1");
    let entry = registry.lookup_location(&key).unwrap();
    assert_eq!(entry.ebird_name, "Location A");

    // A string-equal triple with different numeric formatting is a miss
    let reformatted = LocationKey::new("location a", "1.10", "1.1");
    assert!(registry.lookup_location(&reformatted).is_none());
}

#[test]
fn test_add_overwrites_existing_key() {
    let mut registry = test_registry();

    registry.add_species(SpeciesEntry {
        birdlife_name: "Azure-winged Magpie".to_string(),
        ebird_name: "Azure-winged Magpie".to_string(),
        scientific_name: None,
    });

    assert_eq!(registry.species_count(), 1);
    let entry = registry.lookup_species("Azure-winged Magpie").unwrap();
    assert_eq!(entry.ebird_name, "Azure-winged Magpie");
}

#[test]
fn test_metadata_snapshot() {
    let registry = test_registry();
    let metadata = registry.metadata();

    assert_eq!(metadata.dataset, "portugalaves");
    assert_eq!(metadata.species_count, 1);
    assert_eq!(metadata.location_count, 1);
    assert_eq!(metadata.data_dir, PathBuf::from("/tmp/data"));
}
