//! Record-level conversion

use super::fields;
use super::location::convert_location;
use super::species::convert_species;
use crate::Result;
use crate::app::models::{ConvertedRecord, EbirdRecord, SourceRecord};
use crate::app::services::reference_registry::ReferenceRegistry;
use crate::constants::source_fields;
use std::sync::Arc;

/// Converts WorldBirds records into eBird records
///
/// The converter composes the species, location, and scalar field
/// converters over one source record at a time, using the reference
/// registry loaded for the dataset.
#[derive(Debug, Clone)]
pub struct RecordConverter {
    registry: Arc<ReferenceRegistry>,
}

impl RecordConverter {
    /// Create a new converter with its reference registry
    pub fn new(registry: Arc<ReferenceRegistry>) -> Self {
        Self { registry }
    }

    /// Build the complete eBird record for one source record
    ///
    /// Fields eBird derives itself (protocol, effort distance, effort
    /// area) stay empty, as do the genus and species columns: eBird
    /// resolves taxonomy from the common name. A missing source field or
    /// an unparseable date or time fails the whole record with its row
    /// number; unmatched reference lookups only set the audit flags.
    pub fn convert_record(&self, rin: &SourceRecord) -> Result<ConvertedRecord> {
        let species = convert_species(rin, &self.registry)?;
        let location = convert_location(rin, &self.registry)?;

        let record = EbirdRecord {
            common_name: species.common_name,
            genus: species.genus,
            species: species.species,
            number: fields::convert_count(rin)?,
            species_comments: fields::sanitize_comment(rin.require(source_fields::SPECIES_NOTES)?),
            location_name: location.location_name,
            latitude: location.latitude,
            longitude: location.longitude,
            date: fields::convert_date(rin)?,
            start_time: fields::convert_start_time(rin)?,
            state_province: location.state_province,
            country_code: location.country_code,
            protocol: String::new(),
            number_of_observers: rin.require(source_fields::OBSERVER_COUNT)?.to_string(),
            duration: fields::convert_duration(rin)?,
            all_observations_reported: fields::convert_reported_flag(rin)?,
            effort_distance_miles: String::new(),
            effort_area_acres: String::new(),
            submission_comments: fields::sanitize_comment(rin.require(source_fields::VISIT_NOTES)?),
        };

        Ok(ConvertedRecord {
            record,
            species_converted: species.converted,
            location_converted: location.converted,
        })
    }
}
