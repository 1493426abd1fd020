use super::{sample_record, test_registry};
use crate::Error;
use crate::app::models::SourceRecord;
use crate::app::services::record_converter::species::convert_species;

#[test]
fn test_known_species_is_translated() {
    let registry = test_registry();
    let record = sample_record();

    let fields = convert_species(&record, &registry).unwrap();
    assert_eq!(fields.common_name, "Iberian Magpie");
    assert!(fields.converted);
}

#[test]
fn test_unknown_species_passes_through() {
    let registry = test_registry();
    let mut record = sample_record();
    record.insert("BirdLife common name", "Dodo");

    let fields = convert_species(&record, &registry).unwrap();
    assert_eq!(fields.common_name, "Dodo");
    assert!(!fields.converted);
}

#[test]
fn test_lookup_is_deterministic() {
    let registry = test_registry();
    let record = sample_record();

    let first = convert_species(&record, &registry).unwrap();
    let second = convert_species(&record, &registry).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_genus_and_species_stay_empty() {
    let registry = test_registry();
    let record = sample_record();

    let fields = convert_species(&record, &registry).unwrap();
    assert!(fields.genus.is_empty());
    assert!(fields.species.is_empty());
}

#[test]
fn test_missing_species_field_fails_the_record() {
    let registry = test_registry();
    let record = SourceRecord::new("3");

    let result = convert_species(&record, &registry);
    assert!(result.is_err());

    match result.unwrap_err() {
        Error::RecordFormat { row, message } => {
            assert_eq!(row, "3");
            assert!(message.contains("BirdLife common name"));
        }
        _ => panic!("Expected RecordFormat error"),
    }
}
