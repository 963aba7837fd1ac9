//! Location resolution
//!
//! This module resolves a free-text city name into at most one structured
//! [`Location`] via the geocoding service.

use crate::api::WeatherApiClient;
use crate::app::STATUS_EMPTY_INPUT;
use crate::models::Location;
use crate::{Result, SkycastError};
use tracing::debug;

/// Service for resolving city names to locations
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a city name to at most one candidate location.
    ///
    /// With a country filter the first result matching the filter wins;
    /// without one the first result wins unconditionally. `Ok(None)`
    /// means the service had no matching location, which is distinct
    /// from a transport failure.
    pub async fn resolve(
        api_client: &WeatherApiClient,
        city_name: &str,
        country_filter: Option<&str>,
    ) -> Result<Option<Location>> {
        let city_name = city_name.trim();
        if city_name.is_empty() {
            // The caller validates first; this guard keeps an empty name
            // from ever reaching the network.
            return Err(SkycastError::validation(STATUS_EMPTY_INPUT));
        }

        debug!("Resolving city name: '{city_name}'");

        let candidates = api_client.geocode(city_name, country_filter).await?;
        let location = select_candidate(candidates, country_filter);

        match &location {
            Some(found) => debug!(
                "Resolved '{}' to {} at ({:.4}, {:.4})",
                city_name, found.name, found.latitude, found.longitude
            ),
            None => debug!("No location found for '{city_name}'"),
        }

        Ok(location)
    }
}

/// Selection policy over the geocoding candidates
///
/// The service is asked to filter by country, but the match is re-checked
/// locally against each result's country code.
fn select_candidate(candidates: Vec<Location>, country_filter: Option<&str>) -> Option<Location> {
    match country_filter {
        Some(filter) => candidates.into_iter().find(|candidate| {
            candidate
                .country_code
                .as_deref()
                .is_some_and(|code| code.eq_ignore_ascii_case(filter))
        }),
        None => candidates.into_iter().next(),
    }
}
