//! Location mapping

use crate::Result;
use crate::app::models::{LocationKey, SourceRecord};
use crate::app::services::reference_registry::ReferenceRegistry;
use crate::constants::source_fields;

/// Location-related output fields plus the conversion audit flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFields {
    pub location_name: String,
    pub latitude: String,
    pub longitude: String,
    pub state_province: String,
    pub country_code: String,

    /// A reference-table match was found
    pub converted: bool,
}

/// Map the WorldBirds location to the location registered in eBird
///
/// The source values are the defaults. A matching entry always supplies
/// the region and country codes; the name and coordinates are replaced
/// only when the entry names an eBird location. An unmatched location
/// never fails the record.
pub fn convert_location(
    record: &SourceRecord,
    registry: &ReferenceRegistry,
) -> Result<LocationFields> {
    let name = record.require(source_fields::LOCATION)?;
    let latitude = record.require(source_fields::LATITUDE)?;
    let longitude = record.require(source_fields::LONGITUDE)?;

    let mut fields = LocationFields {
        location_name: name.to_string(),
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
        state_province: String::new(),
        country_code: String::new(),
        converted: false,
    };

    let key = LocationKey::new(name, latitude, longitude);
    if let Some(entry) = registry.lookup_location(&key) {
        if !entry.ebird_name.is_empty() {
            fields.location_name = entry.ebird_name.clone();
            fields.latitude = entry.ebird_latitude.clone();
            fields.longitude = entry.ebird_longitude.clone();
        }
        fields.state_province = entry.region_code.clone();
        fields.country_code = entry.country_code.clone();
        fields.converted = true;
    }

    Ok(fields)
}
