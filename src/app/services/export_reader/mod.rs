//! WorldBirds export reader
//!
//! This module handles the WorldBirds export container format: UTF-16 text
//! starting with a free-form metadata block, a sentinel line marking the
//! start of the data section, one tab-separated row of column names, and
//! tab-separated data rows.
//!
//! ## Architecture
//!
//! The reader is organized into logical components:
//! - [`decode`] - UTF-16 file decoding
//! - [`header`] - column header detection after the data sentinel
//! - [`record`] - per-line record splitting
//!
//! The sentinel scan is the only header-detection heuristic available: the
//! export format carries no explicit schema marker, so the reader relies on
//! the sentinel line followed by the first non-blank row of names.

pub mod decode;
pub mod header;
pub mod record;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decode::read_export_text;
pub use header::HeaderReader;
pub use record::read_record;
