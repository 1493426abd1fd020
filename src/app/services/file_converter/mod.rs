//! End-to-end file conversion
//!
//! This module drives the conversion of one export file: decode the UTF-16
//! text, locate the column header, convert each record, and write the eBird
//! import file. The destination is created lazily on the first converted
//! record, so a source file with nothing to convert produces no output file
//! at all.
//!
//! Failure policy: structural problems (unreadable file, missing sentinel,
//! bad header row) always abort before any output exists. What happens to a
//! record that fails mid-loop depends on the configured
//! [`ConvertMode`](crate::config::ConvertMode).

pub mod writer;

#[cfg(test)]
pub mod tests;

pub use writer::EbirdWriter;

use crate::app::services::export_reader::{HeaderReader, read_export_text, read_record};
use crate::app::services::record_converter::{ConvertStats, RecordConverter};
use crate::app::services::reference_registry::ReferenceRegistry;
use crate::config::{ConvertMode, DatasetProfile};
use crate::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// File-level conversion driver
#[derive(Debug)]
pub struct FileConverter {
    converter: RecordConverter,
    header_reader: HeaderReader,
    mode: ConvertMode,
}

impl FileConverter {
    /// Create a converter for a dataset profile and failure policy
    pub fn new(
        registry: Arc<ReferenceRegistry>,
        profile: &'static DatasetProfile,
        mode: ConvertMode,
    ) -> Self {
        Self {
            converter: RecordConverter::new(registry),
            header_reader: HeaderReader::new(profile),
            mode,
        }
    }

    /// Convert one export file into one eBird import file
    ///
    /// Returns the conversion statistics for the file. In strict mode the
    /// first failing record aborts with its row number; records converted
    /// before it remain in the destination file so the row number has
    /// context to point into.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<ConvertStats> {
        info!("Converting {} -> {}", input.display(), output.display());

        let text = read_export_text(input)?;
        let source_name = input.display().to_string();

        let mut lines = text.lines();
        let headers = self.header_reader.read_header(&mut lines, &source_name)?;

        let mut stats = ConvertStats::new();
        let mut writer = EbirdWriter::new(output);

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            stats.records_read += 1;

            let rin = read_record(line, &headers);
            match self.converter.convert_record(&rin) {
                Ok(converted) => {
                    writer.write_record(&converted.record)?;
                    stats.records_converted += 1;
                    if !converted.species_converted {
                        stats.species_unmatched += 1;
                    }
                    if !converted.location_converted {
                        stats.locations_unmatched += 1;
                    }
                }
                Err(e) => match self.mode {
                    ConvertMode::Strict => {
                        warn!(
                            "Aborting {}: failing source line: {}",
                            input.display(),
                            line
                        );
                        // The record error is the one to surface; a flush
                        // failure at this point is secondary.
                        if let Err(flush_err) = writer.finish() {
                            debug!("flush after record failure also failed: {}", flush_err);
                        }
                        return Err(e);
                    }
                    ConvertMode::BestEffort => {
                        stats.records_skipped += 1;
                        stats.errors.push(e.to_string());
                        debug!("Skipped record: {}", e);
                    }
                },
            }
        }

        writer.finish()?;

        info!(
            "Converted {} of {} records from {} ({} skipped, {} needing review)",
            stats.records_converted,
            stats.records_read,
            input.display(),
            stats.records_skipped,
            stats.needs_review()
        );

        Ok(stats)
    }
}
