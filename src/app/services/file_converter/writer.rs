//! eBird import file writer
//!
//! The import dialect is fixed: every field double-quoted, fields joined by
//! commas, CRLF line endings, UTF-8 text, no header row. Quotes inside
//! values are never escaped (the field converters replace them before
//! serialization), so rows are assembled directly instead of going through
//! a generic CSV writer, whose quote escaping would violate the dialect.

use crate::app::models::EbirdRecord;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes eBird records, creating the destination lazily on first use
#[derive(Debug)]
pub struct EbirdWriter {
    path: PathBuf,
    out: Option<BufWriter<File>>,
    records_written: usize,
}

impl EbirdWriter {
    /// Create a writer for a destination path without touching the
    /// filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            out: None,
            records_written: 0,
        }
    }

    /// The destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the destination file has been created
    pub fn created(&self) -> bool {
        self.out.is_some()
    }

    /// Number of records written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Serialize one record as an import row
    pub fn serialize_row(record: &EbirdRecord) -> String {
        let quoted: Vec<String> = record
            .as_row()
            .iter()
            .map(|value| format!("\"{}\"", value))
            .collect();
        let mut row = quoted.join(",");
        row.push_str("\r\n");
        row
    }

    /// Write one record, creating the destination file on the first call
    pub fn write_record(&mut self, record: &EbirdRecord) -> Result<()> {
        if self.out.is_none() {
            let file = File::create(&self.path).map_err(|e| {
                Error::io(
                    format!("Failed to create output file {}", self.path.display()),
                    e,
                )
            })?;
            self.out = Some(BufWriter::new(file));
        }

        if let Some(out) = self.out.as_mut() {
            out.write_all(Self::serialize_row(record).as_bytes())
                .map_err(|e| {
                    Error::io(format!("Failed to write to {}", self.path.display()), e)
                })?;
            self.records_written += 1;
        }

        Ok(())
    }

    /// Flush buffered rows; a no-op when nothing was written
    pub fn finish(&mut self) -> Result<usize> {
        if let Some(out) = self.out.as_mut() {
            out.flush().map_err(|e| {
                Error::io(format!("Failed to flush {}", self.path.display()), e)
            })?;
        }
        Ok(self.records_written)
    }
}
