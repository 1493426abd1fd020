use crate::Error;
use crate::app::services::export_reader::HeaderReader;
use crate::config::PORTUGALAVES;
use crate::constants::WORLDBIRDS_HEADERS;

fn reader() -> HeaderReader {
    HeaderReader::new(&PORTUGALAVES)
}

#[test]
fn test_header_after_sentinel() {
    let text = "WorldBirds export\nGenerated for: someone\n\nData\nFamily name\tCommon name\tLocation\nrest";
    let mut lines = text.lines();

    let headers = reader().read_header(&mut lines, "test").unwrap();
    assert_eq!(headers, vec!["Family name", "Common name", "Location"]);

    // The iterator is left at the first data line
    assert_eq!(lines.next(), Some("rest"));
}

#[test]
fn test_blank_lines_between_sentinel_and_header() {
    let text = "Data\n\n\nFamily name\tCommon name\n";
    let mut lines = text.lines();

    let headers = reader().read_header(&mut lines, "test").unwrap();
    assert_eq!(headers, vec!["Family name", "Common name"]);
}

#[test]
fn test_sentinel_is_case_insensitive() {
    for sentinel in ["data", "DATA", "Data", "  dAtA  "] {
        let text = format!("{}\nFamily name\tCommon name\n", sentinel);
        let mut lines = text.lines();

        let headers = reader().read_header(&mut lines, "test").unwrap();
        assert_eq!(headers.len(), 2, "sentinel '{}' not recognised", sentinel);
    }
}

#[test]
fn test_known_layout_is_accepted() {
    let text = format!("Data\n{}\n", WORLDBIRDS_HEADERS.join("\t"));
    let mut lines = text.lines();

    let headers = reader().read_header(&mut lines, "test").unwrap();
    assert_eq!(headers.len(), 39);
    assert_eq!(headers[0], "Family name");
    assert_eq!(headers[38], "Visit Species ID");
}

#[test]
fn test_record_in_place_of_header() {
    // A digit in the candidate header line means the header row is missing
    let text = "Data\n1\tTurdus merula\tCommon Blackbird\n";
    let mut lines = text.lines();

    let result = reader().read_header(&mut lines, "test");
    assert!(result.is_err());

    match result.unwrap_err() {
        Error::ExportFormat { file, message } => {
            assert_eq!(file, "test");
            assert!(message.contains("record instead of the column names"));
        }
        _ => panic!("Expected ExportFormat error"),
    }
}

#[test]
fn test_missing_sentinel() {
    let text = "WorldBirds export\nFamily name\tCommon name\n";
    let mut lines = text.lines();

    let result = reader().read_header(&mut lines, "test");
    assert!(result.is_err());

    match result.unwrap_err() {
        Error::ExportFormat { message, .. } => {
            assert!(message.contains("could not find the row containing the column names"));
        }
        _ => panic!("Expected ExportFormat error"),
    }
}

#[test]
fn test_sentinel_at_end_of_stream() {
    let text = "WorldBirds export\nData\n\n";
    let mut lines = text.lines();

    assert!(reader().read_header(&mut lines, "test").is_err());
}
