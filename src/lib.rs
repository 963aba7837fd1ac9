//! `skycast` - city weather lookup backed by the Open-Meteo APIs
//!
//! This library provides the core pipeline: resolving a free-text city
//! name to a geographic location, retrieving current conditions plus a
//! short daily outlook, and formatting the result for display.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod location_resolver;
pub mod models;
pub mod render;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use app::{Submission, run_submission};
pub use config::SkycastConfig;
pub use error::SkycastError;
pub use location_resolver::LocationResolver;
pub use models::{CurrentConditions, DailyOutlook, Location, UnitSystem, WeatherSnapshot};
pub use render::{ForecastCard, WeatherReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;
