//! UTF-16 decoding for WorldBirds export files

use crate::{Error, Result};
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read an export file into a string
///
/// WorldBirds exports are written by the platform's export tool as UTF-16
/// text. The decoder honours a byte-order mark when present and assumes
/// little-endian UTF-16 otherwise.
pub fn read_export_text(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| {
        Error::io(
            format!("Failed to open export file {}", path.display()),
            e,
        )
    })?;

    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding_rs::UTF_16LE))
        .bom_override(true)
        .build(file);

    let mut text = String::new();
    decoder.read_to_string(&mut text).map_err(|e| {
        Error::io(
            format!("Failed to decode export file {}", path.display()),
            e,
        )
    })?;

    Ok(text)
}
