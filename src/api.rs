//! Weather API client for Open-Meteo integration
//!
//! This module provides HTTP client functionality for the geocoding and
//! forecast endpoints. Open-Meteo requires no API key. Failed requests are
//! not retried; each submission makes at most one call per endpoint.

use crate::config::SkycastConfig;
use crate::models::{CurrentConditions, DailyOutlook, Location, UnitSystem, WeatherSnapshot};
use crate::{Result, SkycastError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};

const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));

/// Weather API client for the Open-Meteo services
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: SkycastConfig,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: SkycastConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.weather.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, config })
    }

    /// Search the geocoding service for a free-text place name
    ///
    /// Returns every candidate the service reported, in service order.
    /// A response without a `results` array is an empty list, not an error.
    pub async fn geocode(
        &self,
        location_name: &str,
        country_code: Option<&str>,
    ) -> Result<Vec<Location>> {
        let mut url = format!(
            "{}/v1/search?name={}&count={}&language={}&format=json",
            self.config.weather.geocoding_base_url.trim_end_matches('/'),
            urlencoding::encode(location_name),
            self.config.weather.max_results,
            self.config.weather.language,
        );
        if let Some(code) = country_code {
            url.push_str("&countryCode=");
            url.push_str(&urlencoding::encode(code));
        }

        debug!("Geocoding request URL: {url}");

        let payload: openmeteo::GeocodingResponse = self.get_json(&url).await?;

        let candidates: Vec<Location> = payload
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect();

        info!(
            "Found {} geocoding results for '{}'",
            candidates.len(),
            location_name
        );

        Ok(candidates)
    }

    /// Fetch current conditions, and the daily outlook when a nonzero
    /// forecast horizon is configured
    pub async fn fetch_weather(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot> {
        let forecast_days = self.config.weather.forecast_days;

        let mut url = format!(
            "{}/v1/forecast?latitude={latitude}&longitude={longitude}\
             &current=temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code\
             &temperature_unit={}&wind_speed_unit={}",
            self.config.weather.forecast_base_url.trim_end_matches('/'),
            units.temperature_unit(),
            units.wind_speed_unit(),
        );
        if forecast_days > 0 {
            url.push_str(&format!(
                "&daily=weather_code,temperature_2m_max,temperature_2m_min\
                 &forecast_days={forecast_days}"
            ));
        }

        debug!("Forecast request URL: {url}");

        let payload: openmeteo::ForecastResponse = self.get_json(&url).await?;

        let Some(current) = payload.current else {
            error!("Forecast response is missing the current conditions block");
            return Err(SkycastError::malformed(
                "current weather data is missing in API response",
            ));
        };

        let daily = if forecast_days > 0 {
            let Some(block) = payload.daily else {
                error!("Forecast response is missing the requested daily block");
                return Err(SkycastError::malformed(
                    "daily forecast data is missing in API response",
                ));
            };
            Some(block.into_outlooks())
        } else {
            None
        };

        info!(
            "Retrieved weather for ({latitude:.4}, {longitude:.4}): code {}, {} outlook day(s)",
            current.weather_code,
            daily.as_ref().map_or(0, Vec::len)
        );

        Ok(WeatherSnapshot {
            current: CurrentConditions {
                temperature: current.temperature,
                wind_speed: current.wind_speed,
                humidity: current.relative_humidity,
                weather_code: current.weather_code,
            },
            daily,
        })
    }

    /// Issue one GET request and decode the JSON body
    ///
    /// A non-success status is a lookup failure carrying the status code;
    /// an undecodable 2xx body is a malformed response.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("API request failed with HTTP status {status}");
            return Err(SkycastError::lookup(status));
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to parse API response: {e}");
            SkycastError::malformed(format!("unreadable response body: {e}"))
        })
    }
}

/// Open-Meteo API response structures and conversion utilities
mod openmeteo {
    use super::{DailyOutlook, Location};
    use serde::Deserialize;

    /// Geocoding response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub(super) struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub(super) struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub admin1: Option<String>,
        pub country: Option<String>,
        pub country_code: Option<String>,
    }

    impl From<GeocodingResult> for Location {
        fn from(result: GeocodingResult) -> Self {
            Location {
                name: result.name,
                region: result.admin1,
                country: result.country,
                country_code: result.country_code,
                latitude: result.latitude,
                longitude: result.longitude,
            }
        }
    }

    /// Forecast response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub(super) struct ForecastResponse {
        pub current: Option<CurrentData>,
        pub daily: Option<DailyData>,
    }

    /// Current conditions block
    #[derive(Debug, Deserialize)]
    pub(super) struct CurrentData {
        #[serde(rename = "temperature_2m")]
        pub temperature: f64,
        #[serde(rename = "relative_humidity_2m")]
        pub relative_humidity: u8,
        #[serde(rename = "wind_speed_10m")]
        pub wind_speed: f64,
        pub weather_code: i32,
    }

    /// Daily aggregate block; arrays are positional per day
    #[derive(Debug, Deserialize)]
    pub(super) struct DailyData {
        pub time: Vec<String>,
        pub weather_code: Option<Vec<Option<i32>>>,
        #[serde(rename = "temperature_2m_max")]
        pub temperature_max: Option<Vec<Option<f64>>>,
        #[serde(rename = "temperature_2m_min")]
        pub temperature_min: Option<Vec<Option<f64>>>,
    }

    impl DailyData {
        /// Zip the positional arrays into per-day entries
        ///
        /// Short or absent arrays yield `None` values, never a panic.
        pub(super) fn into_outlooks(self) -> Vec<DailyOutlook> {
            let codes = self.weather_code.unwrap_or_default();
            let highs = self.temperature_max.unwrap_or_default();
            let lows = self.temperature_min.unwrap_or_default();

            self.time
                .into_iter()
                .enumerate()
                .map(|(i, date)| DailyOutlook {
                    date,
                    weather_code: codes.get(i).copied().flatten(),
                    high: highs.get(i).copied().flatten(),
                    low: lows.get(i).copied().flatten(),
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::openmeteo::{DailyData, GeocodingResponse};
    use super::*;

    #[test]
    fn test_geocoding_result_to_location() {
        let payload = r#"{
            "results": [{
                "name": "Springfield",
                "latitude": 39.78,
                "longitude": -89.65,
                "admin1": "Illinois",
                "country": "United States",
                "country_code": "US"
            }]
        }"#;

        let response: GeocodingResponse = serde_json::from_str(payload).unwrap();
        let results = response.results.unwrap();
        let location = Location::from(results.into_iter().next().unwrap());

        assert_eq!(location.name, "Springfield");
        assert_eq!(location.region.as_deref(), Some("Illinois"));
        assert_eq!(location.country.as_deref(), Some("United States"));
        assert_eq!(location.country_code.as_deref(), Some("US"));
        assert_eq!(location.latitude, 39.78);
        assert_eq!(location.longitude, -89.65);
    }

    #[test]
    fn test_geocoding_response_without_results_is_empty() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(response.results.is_none());
    }

    #[test]
    fn test_daily_arrays_zip_positionally() {
        let payload = r#"{
            "time": ["2026-08-06", "2026-08-07", "2026-08-08"],
            "weather_code": [1, null, 61],
            "temperature_2m_max": [24.6, null, 19.2],
            "temperature_2m_min": [13.1, 14.8]
        }"#;

        let block: DailyData = serde_json::from_str(payload).unwrap();
        let outlooks = block.into_outlooks();

        assert_eq!(outlooks.len(), 3);
        assert_eq!(outlooks[0].weather_code, Some(1));
        assert_eq!(outlooks[0].high, Some(24.6));
        assert_eq!(outlooks[1].weather_code, None);
        assert_eq!(outlooks[1].high, None);
        assert_eq!(outlooks[1].low, Some(14.8));
        // min array is shorter than the time axis
        assert_eq!(outlooks[2].low, None);
    }
}
