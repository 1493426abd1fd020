//! Record splitting for WorldBirds exports

use crate::app::models::SourceRecord;
use tracing::debug;

/// Split one export line into a [`SourceRecord`]
///
/// The first tab-separated token of the line is the row number written by
/// the export tool; it is captured raw and kept as an opaque diagnostic
/// identifier. The remaining fields are trimmed and paired positionally
/// with `names`; when the counts differ the longer side is truncated.
pub fn read_record(line: &str, names: &[String]) -> SourceRecord {
    let row_number = line.split('\t').next().unwrap_or_default();
    let mut record = SourceRecord::new(row_number);

    let values: Vec<&str> = line.trim().split('\t').map(str::trim).collect();
    if values.len() != names.len() + 1 {
        debug!(
            "record {}: {} data fields for {} column names",
            row_number.trim(),
            values.len().saturating_sub(1),
            names.len()
        );
    }

    for (name, value) in names.iter().zip(values.into_iter().skip(1)) {
        record.insert(name.clone(), value);
    }

    record
}
