//! Scalar field conversions
//!
//! Pure converters for the count, date, time, duration, comment, and flag
//! fields of a record.

use crate::app::models::SourceRecord;
use crate::constants::{
    COUNT_PRESENT_MARKER, COUNT_UNSPECIFIED, EBIRD_DATE_FORMAT, TIME_FORMAT,
    WORLDBIRDS_DATE_FORMAT, source_fields,
};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime};

/// Convert the individual count
///
/// An empty count or the marker "present" means birds were seen but not
/// counted, which eBird spells "X". Anything else passes through.
pub fn convert_count(record: &SourceRecord) -> Result<String> {
    let count = record.require(source_fields::COUNT)?;
    if count.is_empty() || count.eq_ignore_ascii_case(COUNT_PRESENT_MARKER) {
        Ok(COUNT_UNSPECIFIED.to_string())
    } else {
        Ok(count.to_string())
    }
}

/// Reformat the visit date from ISO ordering to the US ordering eBird
/// expects
pub fn convert_date(record: &SourceRecord) -> Result<String> {
    let raw = record.require(source_fields::VISIT_DATE)?;
    let date = NaiveDate::parse_from_str(raw, WORLDBIRDS_DATE_FORMAT).map_err(|e| {
        Error::record_format(
            record.row_number(),
            format!(
                "invalid '{}' value '{}': {}",
                source_fields::VISIT_DATE,
                raw,
                e
            ),
        )
    })?;
    Ok(date.format(EBIRD_DATE_FORMAT).to_string())
}

/// Convert the visit start time, normalizing to two-digit hours
pub fn convert_start_time(record: &SourceRecord) -> Result<String> {
    let start = parse_time(record, source_fields::START_TIME)?;
    Ok(start.format(TIME_FORMAT).to_string())
}

/// Visit duration in whole minutes, as a plain integer string
///
/// Sessions are same-day by contract; an end time earlier than the start
/// time is rejected rather than wrapped across midnight.
pub fn convert_duration(record: &SourceRecord) -> Result<String> {
    let start = parse_time(record, source_fields::START_TIME)?;
    let end = parse_time(record, source_fields::END_TIME)?;

    if end < start {
        return Err(Error::record_format(
            record.row_number(),
            format!(
                "end time {} precedes start time {}",
                end.format(TIME_FORMAT),
                start.format(TIME_FORMAT)
            ),
        ));
    }

    let minutes = (end - start).num_minutes();
    Ok(minutes.to_string())
}

/// Replace double quotes with single quotes so free text cannot break the
/// quoted output rows
pub fn sanitize_comment(text: &str) -> String {
    text.replace('"', "'")
}

/// First letter of the "All birds recorded?" value, upper-cased
pub fn convert_reported_flag(record: &SourceRecord) -> Result<String> {
    let raw = record.require(source_fields::ALL_RECORDED)?;
    let first = raw.chars().next().ok_or_else(|| {
        Error::record_format(
            record.row_number(),
            format!("empty '{}' value", source_fields::ALL_RECORDED),
        )
    })?;
    Ok(first.to_uppercase().to_string())
}

/// Parse a 24-hour HH:MM time field
fn parse_time(record: &SourceRecord, name: &str) -> Result<NaiveTime> {
    let raw = record.require(name)?;
    NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|e| {
        Error::record_format(
            record.row_number(),
            format!("invalid '{}' value '{}': {}", name, raw, e),
        )
    })
}
