//! Conversion statistics

use serde::{Deserialize, Serialize};

/// Statistics for one file conversion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertStats {
    /// Number of data rows read from the source file
    pub records_read: usize,

    /// Number of records written to the destination file
    pub records_converted: usize,

    /// Number of records dropped by the best-effort policy
    pub records_skipped: usize,

    /// Converted records whose species had no reference-table match
    pub species_unmatched: usize,

    /// Converted records whose location had no reference-table match
    pub locations_unmatched: usize,

    /// Per-record error messages, carrying row numbers
    pub errors: Vec<String>,
}

impl ConvertStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate conversion success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.records_read == 0 {
            0.0
        } else {
            (self.records_converted as f64 / self.records_read as f64) * 100.0
        }
    }

    /// Number of converted records needing manual review before import
    pub fn needs_review(&self) -> usize {
        self.species_unmatched + self.locations_unmatched
    }
}
