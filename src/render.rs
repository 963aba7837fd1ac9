//! Presentation of resolved weather data
//!
//! Pure, synchronous mapping from a location and weather snapshot to the
//! display strings the output surface renders. Owns the weather-code
//! condition table.

use crate::models::{DailyOutlook, Location, UnitSystem, WeatherSnapshot};
use chrono::NaiveDate;

/// Placeholder for weather codes missing from the condition table
pub const CONDITION_UNAVAILABLE: &str = "Weather condition unavailable";

/// Placeholder for missing daily high/low values
pub const VALUE_UNAVAILABLE: &str = "--";

/// Human-readable label for a weather code, `None` for unmapped codes
///
/// Codes are defined by the forecast provider; see
/// <https://open-meteo.com/en/docs#weathervariables>
#[must_use]
pub fn condition_label(code: i32) -> Option<&'static str> {
    let label = match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => return None,
    };
    Some(label)
}

/// Condition label with the fixed fallback for unmapped codes
#[must_use]
pub fn describe_condition(code: i32) -> &'static str {
    condition_label(code).unwrap_or(CONDITION_UNAVAILABLE)
}

/// Fully formatted weather summary for one location
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Joined location label, e.g. "Springfield, Illinois, United States"
    pub location: String,
    /// Condition label for the current weather code
    pub condition: String,
    /// Rounded temperature with unit symbol, e.g. "72 °F"
    pub temperature: String,
    /// Rounded wind speed with unit symbol, e.g. "6 mph"
    pub wind: String,
    /// Raw humidity percentage, e.g. "40%"
    pub humidity: String,
    /// One card per day of the daily outlook, in service order
    pub forecast: Vec<ForecastCard>,
}

/// One formatted day of the daily outlook
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCard {
    /// Weekday/date label, e.g. "Thu, Aug 6"
    pub day: String,
    /// Condition label for the day's weather code
    pub condition: String,
    /// Rounded daily high, or "--" when unreported
    pub high: String,
    /// Rounded daily low, or "--" when unreported
    pub low: String,
}

/// Build the display model for one resolved location and snapshot
#[must_use]
pub fn render_report(
    location: &Location,
    snapshot: &WeatherSnapshot,
    units: UnitSystem,
) -> WeatherReport {
    WeatherReport {
        location: location_label(location),
        condition: describe_condition(snapshot.current.weather_code).to_string(),
        temperature: format!(
            "{} {}",
            snapshot.current.temperature.round() as i64,
            units.temperature_symbol()
        ),
        wind: format!(
            "{} {}",
            snapshot.current.wind_speed.round() as i64,
            units.wind_speed_symbol()
        ),
        humidity: format!("{}%", snapshot.current.humidity),
        forecast: snapshot
            .daily_outlook()
            .iter()
            .map(|day| forecast_card(day, units))
            .collect(),
    }
}

/// Join name, region and country with ", ", skipping absent parts
fn location_label(location: &Location) -> String {
    let mut label = location.name.clone();
    for part in [location.region.as_deref(), location.country.as_deref()] {
        if let Some(part) = part.filter(|p| !p.is_empty()) {
            label.push_str(", ");
            label.push_str(part);
        }
    }
    label
}

fn forecast_card(day: &DailyOutlook, units: UnitSystem) -> ForecastCard {
    ForecastCard {
        day: day_label(&day.date),
        condition: day
            .weather_code
            .map_or(CONDITION_UNAVAILABLE, describe_condition)
            .to_string(),
        high: format_daily_temperature(day.high, units),
        low: format_daily_temperature(day.low, units),
    }
}

/// Weekday/date label for an ISO calendar date
///
/// An unparseable date falls back to the raw string.
fn day_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a, %b %-d").to_string())
        .unwrap_or_else(|_| date.to_string())
}

fn format_daily_temperature(value: Option<f64>, units: UnitSystem) -> String {
    match value {
        Some(v) => format!("{} {}", v.round() as i64, units.temperature_symbol()),
        None => VALUE_UNAVAILABLE.to_string(),
    }
}
