//! Nominatim `reverse` endpoint response types.

use hackfind_core::PlaceDescription;
use serde::Deserialize;

/// Top-level envelope for a reverse-geocoding response.
///
/// Nominatim omits `address` entirely for unresolvable coordinates (open
/// ocean), so the field is optional rather than an error.
#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
    #[serde(default)]
    pub address: Option<Address>,
}

/// The structured address object inside a reverse-geocoding response.
///
/// Every field is optional; which ones appear depends on the coordinate and
/// the zoom level requested.
#[derive(Debug, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    /// Converts the address into a place description, most specific part
    /// first. The city slot falls back to town, then village.
    #[must_use]
    pub fn to_place(&self) -> PlaceDescription {
        let city = self
            .city
            .clone()
            .or_else(|| self.town.clone())
            .or_else(|| self.village.clone());
        PlaceDescription::new([
            city,
            self.county.clone(),
            self.state.clone(),
            self.country.clone(),
        ])
    }
}
