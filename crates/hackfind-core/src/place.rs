//! Coordinates and the place descriptions derived from them.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] when `lat` is outside
    /// [-90, 90] or `lng` is outside [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoreError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Human-readable two-decimal label, e.g. `"37.77, -122.41"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.2}, {:.2}", self.lat, self.lng)
    }
}

/// Human-readable decomposition of a coordinate, most specific part first
/// (city, county, state, country — only the parts that are present).
///
/// The degraded form produced when reverse geocoding fails carries a single
/// component: the two-decimal coordinate label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceDescription {
    components: Vec<String>,
}

impl PlaceDescription {
    /// Builds a place description from optional components, dropping absent
    /// and empty entries while preserving order.
    pub fn new<I>(components: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let components = components
            .into_iter()
            .flatten()
            .filter(|c| !c.trim().is_empty())
            .collect();
        Self { components }
    }

    /// The degraded single-component form used when reverse geocoding fails.
    #[must_use]
    pub fn from_coordinate(coord: Coordinate) -> Self {
        Self {
            components: vec![coord.label()],
        }
    }

    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Display label, e.g. `"Springfield, Sangamon County, Illinois, USA"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.components.join(", ")
    }

    /// Lowercased components used for case-insensitive matching against
    /// search-result content.
    #[must_use]
    pub fn location_terms(&self) -> Vec<String> {
        self.components.iter().map(|c| c.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_new_accepts_valid_range() {
        let coord = Coordinate::new(37.77, -122.41).unwrap();
        assert_eq!(coord.lat, 37.77);
        assert_eq!(coord.lng, -122.41);
    }

    #[test]
    fn coordinate_new_rejects_out_of_range_lat() {
        let result = Coordinate::new(90.1, 0.0);
        assert!(matches!(
            result,
            Err(CoreError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn coordinate_new_rejects_out_of_range_lng() {
        let result = Coordinate::new(0.0, -180.5);
        assert!(matches!(
            result,
            Err(CoreError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn coordinate_label_formats_two_decimals() {
        let coord = Coordinate::new(37.7749, -122.4194).unwrap();
        assert_eq!(coord.label(), "37.77, -122.42");
    }

    #[test]
    fn place_description_drops_absent_components() {
        let place = PlaceDescription::new([
            Some("Springfield".to_owned()),
            None,
            Some("Illinois".to_owned()),
            Some("USA".to_owned()),
        ]);
        assert_eq!(place.components(), ["Springfield", "Illinois", "USA"]);
        assert_eq!(place.label(), "Springfield, Illinois, USA");
    }

    #[test]
    fn place_description_drops_empty_components() {
        let place = PlaceDescription::new([Some(String::new()), Some("   ".to_owned())]);
        assert!(place.is_empty());
    }

    #[test]
    fn place_description_location_terms_are_lowercase() {
        let place = PlaceDescription::new([
            Some("San Francisco".to_owned()),
            Some("California".to_owned()),
        ]);
        assert_eq!(place.location_terms(), ["san francisco", "california"]);
    }

    #[test]
    fn from_coordinate_uses_two_decimal_label() {
        let coord = Coordinate::new(37.77, -122.41).unwrap();
        let place = PlaceDescription::from_coordinate(coord);
        assert_eq!(place.components(), ["37.77, -122.41"]);
        assert_eq!(place.label(), "37.77, -122.41");
    }
}
