//! Integration tests for the end-to-end conversion workflow
//!
//! These tests run the file converter against the reference tables shipped
//! in `data/portugalaves`, the same way the CLI does.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use worldbirds_converter::app::services::file_converter::FileConverter;
use worldbirds_converter::app::services::reference_registry::ReferenceRegistry;
use worldbirds_converter::config::{ConvertMode, PORTUGALAVES};
use worldbirds_converter::constants::{EBIRD_HEADERS, WORLDBIRDS_HEADERS};

fn shipped_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Write a UTF-16LE export file with a byte-order mark
fn write_export(path: &Path, text: &str) {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}

/// Default value for a source column in test rows
fn default_value(name: &str) -> &'static str {
    match name {
        "BirdLife common name" => "Azure-winged Magpie",
        "Location" => "Lagoa de Obidos",
        "Latitude" => "39.40",
        "Longitude" => "-9.22",
        "Visit date" => "2024-05-01",
        "Start time" => "08:15",
        "End time" => "11:00",
        "Number of observers" => "2",
        "Number" => "present",
        "Visit species notes" => "pair near the \"old\" hide",
        "Visit notes" => "clear morning",
        "All birds recorded?" => "true",
        "Visit Species ID" => "901",
        _ => "-",
    }
}

/// Build one export data row: a leading row number, then the 39 columns
fn export_row(row_number: &str, overrides: &[(&str, &str)]) -> String {
    let mut values: Vec<String> = WORLDBIRDS_HEADERS
        .iter()
        .map(|name| default_value(name).to_string())
        .collect();
    for (name, value) in overrides {
        let idx = WORLDBIRDS_HEADERS
            .iter()
            .position(|header| header == name)
            .unwrap();
        values[idx] = value.to_string();
    }
    format!("{}\t{}", row_number, values.join("\t"))
}

/// Build a complete export: metadata block, sentinel, header, data rows
fn export_text(rows: &[String]) -> String {
    let mut text = String::new();
    text.push_str("WorldBirds - PortugalAves\nObservations export\n\nData\n");
    text.push_str(&WORLDBIRDS_HEADERS.join("\t"));
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

fn shipped_converter(mode: ConvertMode) -> FileConverter {
    let (registry, _stats) =
        ReferenceRegistry::load_for_dataset(&shipped_data_dir(), &PORTUGALAVES).unwrap();
    FileConverter::new(Arc::new(registry), &PORTUGALAVES, mode)
}

#[test]
fn test_known_species_and_location_convert_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("visits.csv");
    let output = temp_dir.path().join("ebird.csv");

    write_export(&input, &export_text(&[export_row("1", &[])]));

    let stats = shipped_converter(ConvertMode::Strict)
        .convert_file(&input, &output)
        .unwrap();

    assert_eq!(stats.records_read, 1);
    assert_eq!(stats.records_converted, 1);
    assert_eq!(stats.needs_review(), 0);

    let content = fs::read_to_string(&output).unwrap();
    let expected = "\"Iberian Magpie\",\"\",\"\",\"X\",\"pair near the 'old' hide\",\
                    \"Lagoa de Óbidos\",\"39.4000\",\"-9.2200\",\"05/01/2024\",\"08:15\",\
                    \"PT-10\",\"PT\",\"\",\"2\",\"165\",\"T\",\"\",\"\",\
                    \"clear morning\"\r\n";
    assert_eq!(content, expected);

    // Exactly one quoted field per output column
    let line = content.trim_end();
    assert_eq!(line.split("\",\"").count(), EBIRD_HEADERS.len());
}

#[test]
fn test_region_only_location_keeps_source_name() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("visits.csv");
    let output = temp_dir.path().join("ebird.csv");

    let row = export_row(
        "1",
        &[
            ("Location", "Serra da Estrela"),
            ("Latitude", "40.32"),
            ("Longitude", "-7.61"),
        ],
    );
    write_export(&input, &export_text(&[row]));

    let stats = shipped_converter(ConvertMode::Strict)
        .convert_file(&input, &output)
        .unwrap();
    assert_eq!(stats.locations_unmatched, 0);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("\"Serra da Estrela\",\"40.32\",\"-7.61\""));
    assert!(content.contains("\"PT-09\",\"PT\""));
}

#[test]
fn test_unknown_names_pass_through_and_are_flagged() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("visits.csv");
    let output = temp_dir.path().join("ebird.csv");

    let row = export_row(
        "1",
        &[
            ("BirdLife common name", "Pin-tailed Sandgrouse"),
            ("Location", "Castro Verde"),
            ("Latitude", "37.70"),
            ("Longitude", "-8.09"),
        ],
    );
    write_export(&input, &export_text(&[row]));

    let stats = shipped_converter(ConvertMode::Strict)
        .convert_file(&input, &output)
        .unwrap();

    assert_eq!(stats.records_converted, 1);
    assert_eq!(stats.species_unmatched, 1);
    assert_eq!(stats.locations_unmatched, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("\"Pin-tailed Sandgrouse\""));
    assert!(content.contains("\"Castro Verde\",\"37.70\",\"-8.09\""));
    // No reference match leaves the region and country empty
    assert!(content.contains("\"08:15\",\"\",\"\""));
}

#[test]
fn test_header_only_export_produces_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("visits.csv");
    let output = temp_dir.path().join("ebird.csv");

    write_export(&input, &export_text(&[]));

    let stats = shipped_converter(ConvertMode::Strict)
        .convert_file(&input, &output)
        .unwrap();

    assert_eq!(stats.records_read, 0);
    assert!(!output.exists());
}

#[test]
fn test_strict_and_best_effort_disagree_on_bad_records() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("visits.csv");

    let text = export_text(&[
        export_row("1", &[]),
        export_row("2", &[("End time", "07:00")]),
        export_row("3", &[("BirdLife common name", "White Stork")]),
    ]);
    write_export(&input, &text);

    // Strict: the cross-midnight-looking session aborts the file
    let strict_output = temp_dir.path().join("strict.csv");
    let result = shipped_converter(ConvertMode::Strict).convert_file(&input, &strict_output);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("record 2"));

    // Best effort: the bad record is skipped, the rest convert
    let lenient_output = temp_dir.path().join("lenient.csv");
    let stats = shipped_converter(ConvertMode::BestEffort)
        .convert_file(&input, &lenient_output)
        .unwrap();

    assert_eq!(stats.records_read, 3);
    assert_eq!(stats.records_converted, 2);
    assert_eq!(stats.records_skipped, 1);
    assert_eq!(stats.errors.len(), 1);

    let content = fs::read_to_string(&lenient_output).unwrap();
    assert_eq!(content.matches("\r\n").count(), 2);
    assert!(content.contains("\"Iberian Magpie\""));
    assert!(content.contains("\"White Stork\""));
}

#[test]
fn test_output_is_plain_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("visits.csv");
    let output = temp_dir.path().join("ebird.csv");

    write_export(&input, &export_text(&[export_row("1", &[])]));

    shipped_converter(ConvertMode::Strict)
        .convert_file(&input, &output)
        .unwrap();

    let bytes = fs::read(&output).unwrap();
    // No UTF-16 byte-order mark; accented characters encoded as UTF-8
    assert_ne!(&bytes[..2], &[0xFF, 0xFE]);
    let content = String::from_utf8(bytes).unwrap();
    assert!(content.contains("Óbidos"));
}
