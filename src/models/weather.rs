//! Current weather conditions and unit-system bundles

use serde::{Deserialize, Serialize};

/// Current weather conditions for one location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Air temperature at 2 m, in the requested temperature unit
    pub temperature: f64,
    /// Wind speed at 10 m, in the requested wind-speed unit
    pub wind_speed: f64,
    /// Relative humidity as an integer percentage (0-100)
    pub humidity: u8,
    /// Weather code reported by the forecast provider (WMO)
    pub weather_code: i32,
}

/// Unit system preference
///
/// Each variant maps to a fixed bundle of request parameter values and
/// display symbols, applied consistently to one rendered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Resolve a user-supplied unit key; unrecognized keys fall back to metric
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "imperial" => Self::Imperial,
            _ => Self::Metric,
        }
    }

    /// `temperature_unit` request parameter value
    #[must_use]
    pub fn temperature_unit(self) -> &'static str {
        match self {
            Self::Metric => "celsius",
            Self::Imperial => "fahrenheit",
        }
    }

    /// `wind_speed_unit` request parameter value
    #[must_use]
    pub fn wind_speed_unit(self) -> &'static str {
        match self {
            Self::Metric => "kmh",
            Self::Imperial => "mph",
        }
    }

    /// Display symbol for temperatures
    #[must_use]
    pub fn temperature_symbol(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Display symbol for wind speeds
    #[must_use]
    pub fn wind_speed_symbol(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("metric", UnitSystem::Metric)]
    #[case("imperial", UnitSystem::Imperial)]
    #[case("Imperial", UnitSystem::Imperial)]
    #[case(" imperial ", UnitSystem::Imperial)]
    #[case("fahrenheit", UnitSystem::Metric)]
    #[case("", UnitSystem::Metric)]
    #[case("nonsense", UnitSystem::Metric)]
    fn test_from_key_defaults_to_metric(#[case] key: &str, #[case] expected: UnitSystem) {
        assert_eq!(UnitSystem::from_key(key), expected);
    }

    #[test]
    fn test_metric_bundle() {
        let units = UnitSystem::Metric;
        assert_eq!(units.temperature_unit(), "celsius");
        assert_eq!(units.wind_speed_unit(), "kmh");
        assert_eq!(units.temperature_symbol(), "°C");
        assert_eq!(units.wind_speed_symbol(), "km/h");
    }

    #[test]
    fn test_imperial_bundle() {
        let units = UnitSystem::Imperial;
        assert_eq!(units.temperature_unit(), "fahrenheit");
        assert_eq!(units.wind_speed_unit(), "mph");
        assert_eq!(units.temperature_symbol(), "°F");
        assert_eq!(units.wind_speed_symbol(), "mph");
    }
}
