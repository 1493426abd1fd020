//! Column header detection for WorldBirds exports

use crate::config::DatasetProfile;
use crate::{Error, Result};
use regex::Regex;
use tracing::{debug, warn};

/// Finds the column header row of an export
///
/// An export opens with a metadata block describing the query that produced
/// it. A line equal to the profile's sentinel (compared case-insensitively,
/// ignoring surrounding whitespace) marks the start of the data section; the
/// first non-blank line after it carries the tab-separated column names for
/// the records that follow.
#[derive(Debug)]
pub struct HeaderReader {
    profile: &'static DatasetProfile,
    digit: Regex,
}

impl HeaderReader {
    /// Create a header reader for a dataset profile
    pub fn new(profile: &'static DatasetProfile) -> Self {
        // Column names never contain digits; a digit in the candidate line
        // means a data row turned up where the header row was expected.
        let digit = Regex::new(r"\d").unwrap();
        Self { profile, digit }
    }

    /// Scan lines up to and including the column header row and return the
    /// column names
    ///
    /// Blank lines are skipped anywhere in the scan. `source` names the
    /// input in error messages.
    pub fn read_header<'a, I>(&self, lines: &mut I, source: &str) -> Result<Vec<String>>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut after_sentinel = false;

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.eq_ignore_ascii_case(self.profile.data_sentinel) {
                after_sentinel = true;
            } else if after_sentinel {
                if self.digit.is_match(line) {
                    return Err(Error::export_format(
                        source,
                        "found a record instead of the column names",
                    ));
                }

                let headers: Vec<String> = line.split('\t').map(str::to_string).collect();
                if headers != self.profile.source_headers {
                    warn!(
                        "Export {} deviates from the known {} column layout ({} columns found)",
                        source,
                        self.profile.name,
                        headers.len()
                    );
                }
                debug!("Found {} column names in {}", headers.len(), source);
                return Ok(headers);
            }
        }

        Err(Error::export_format(
            source,
            "could not find the row containing the column names",
        ))
    }
}
