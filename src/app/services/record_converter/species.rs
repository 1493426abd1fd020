//! Species name mapping

use crate::Result;
use crate::app::models::SourceRecord;
use crate::app::services::reference_registry::ReferenceRegistry;
use crate::constants::source_fields;

/// Species-related output fields plus the conversion audit flag
///
/// The genus and species columns stay empty: eBird resolves taxonomy from
/// the common name during import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesFields {
    pub common_name: String,
    pub genus: String,
    pub species: String,

    /// A reference-table match was found
    pub converted: bool,
}

/// Map the WorldBirds species name to the name used by eBird
///
/// When the BirdLife common name has no entry in the species table the raw
/// name passes through unchanged and the flag marks the record for manual
/// review; an unmatched species never fails the record.
pub fn convert_species(
    record: &SourceRecord,
    registry: &ReferenceRegistry,
) -> Result<SpeciesFields> {
    let name = record.require(source_fields::BIRDLIFE_NAME)?;

    let mut fields = SpeciesFields::default();
    match registry.lookup_species(name) {
        Some(entry) => {
            fields.common_name = entry.ebird_name.clone();
            fields.converted = true;
        }
        None => {
            fields.common_name = name.to_string();
            fields.converted = false;
        }
    }

    Ok(fields)
}
