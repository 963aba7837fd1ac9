//! Data models for the skycast application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and administrative metadata
//! - Weather: Current conditions and unit-system bundles
//! - Forecast: The per-submission weather snapshot and daily outlook

pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{DailyOutlook, WeatherSnapshot};
pub use location::Location;
pub use weather::{CurrentConditions, UnitSystem};
