//! Record conversion from WorldBirds to eBird
//!
//! This module maps one [`SourceRecord`](crate::app::models::SourceRecord)
//! to one complete eBird record. The species and location converters
//! translate names through the reference registry; the scalar converters
//! handle the count, date, time, duration, comment, and flag fields.
//!
//! A reference-table miss is not an error: the raw value passes through
//! and the record is flagged for review. A missing source field or an
//! unparseable date or time fails the record with its row number.

pub mod converter;
pub mod fields;
pub mod location;
pub mod species;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use converter::RecordConverter;
pub use location::LocationFields;
pub use species::SpeciesFields;
pub use stats::ConvertStats;
