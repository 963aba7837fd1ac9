//! Submission workflow
//!
//! One submission walks `Idle -> Loading -> {Success, NotFound, Error}`:
//! resolve the city, fetch its weather, format the report. The two
//! terminal non-success states only differ in message text; retrying
//! always takes a fresh submission.

use crate::api::WeatherApiClient;
use crate::location_resolver::LocationResolver;
use crate::models::UnitSystem;
use crate::render::{self, WeatherReport};
use crate::{Result, SkycastError};
use tracing::info;

/// Status line for an empty submission
pub const STATUS_EMPTY_INPUT: &str = "Please enter a city name.";
/// Status line shown while the network steps run
pub const STATUS_LOADING: &str = "Loading weather...";
/// Status line when geocoding has no matching location
pub const STATUS_NOT_FOUND: &str = "City not found. Try another search.";

/// Terminal states of one submission that are not failures
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Weather retrieved and formatted
    Success(WeatherReport),
    /// Geocoding returned no matching location
    NotFound,
}

/// Run one submission end to end.
///
/// The forecast call strictly follows the geocoding call; nothing runs in
/// parallel within a submission, and overlapping submissions are not
/// coordinated. Every network-step failure surfaces as an error whose
/// `user_message()` is the single generic failure text.
pub async fn run_submission(
    client: &WeatherApiClient,
    city_name: &str,
    units: UnitSystem,
    country_filter: Option<&str>,
) -> Result<Submission> {
    let city_name = city_name.trim();
    if city_name.is_empty() {
        return Err(SkycastError::validation(STATUS_EMPTY_INPUT));
    }

    let Some(location) = LocationResolver::resolve(client, city_name, country_filter).await? else {
        return Ok(Submission::NotFound);
    };

    let snapshot = client
        .fetch_weather(location.latitude, location.longitude, units)
        .await?;

    info!("Weather retrieved for {}", location.name);

    Ok(Submission::Success(render::render_report(
        &location, &snapshot, units,
    )))
}
