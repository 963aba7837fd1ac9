//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// A location resolved from a free-text city name
///
/// Produced from the first (or first matching) geocoding result and
/// lives only for the duration of one submission.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// City or place name as returned by the geocoding service
    pub name: String,
    /// First-level administrative area (state, region), when known
    pub region: Option<String>,
    /// Country name, when known
    pub country: Option<String>,
    /// Country code (ISO 3166-1 alpha-2), when known
    pub country_code: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Location {
    /// Create a new location with coordinates and a name only
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            name,
            region: None,
            country: None,
            country_code: None,
            latitude,
            longitude,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaves_metadata_unset() {
        let location = Location::new(39.78, -89.65, "Springfield".to_string());
        assert_eq!(location.name, "Springfield");
        assert!(location.region.is_none());
        assert!(location.country.is_none());
        assert!(location.country_code.is_none());
    }

    #[test]
    fn test_format_coordinates() {
        let location = Location::new(46.818_234, 8.227_456, "Test".to_string());
        assert_eq!(location.format_coordinates(), "46.8182, 8.2275");
    }
}
