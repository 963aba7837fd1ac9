//! Weather snapshot and daily outlook models

use super::CurrentConditions;
use serde::{Deserialize, Serialize};

/// One day of the daily outlook
///
/// The provider may report individual values as null; those survive as
/// `None` and become a presentation concern, not an error.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyOutlook {
    /// ISO-8601 calendar date, e.g. "2026-08-06"
    pub date: String,
    /// Weather code for the day, when reported
    pub weather_code: Option<i32>,
    /// Daily maximum temperature, when reported
    pub high: Option<f64>,
    /// Daily minimum temperature, when reported
    pub low: Option<f64>,
}

/// Weather retrieved for one location in one submission
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Current conditions
    pub current: CurrentConditions,
    /// Daily outlook, present when a nonzero forecast horizon was requested
    pub daily: Option<Vec<DailyOutlook>>,
}

impl WeatherSnapshot {
    /// Days in the daily outlook, empty when none was requested
    #[must_use]
    pub fn daily_outlook(&self) -> &[DailyOutlook] {
        self.daily.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> CurrentConditions {
        CurrentConditions {
            temperature: 21.3,
            wind_speed: 11.9,
            humidity: 55,
            weather_code: 2,
        }
    }

    #[test]
    fn test_daily_outlook_empty_without_forecast() {
        let snapshot = WeatherSnapshot {
            current: current(),
            daily: None,
        };
        assert!(snapshot.daily_outlook().is_empty());
    }

    #[test]
    fn test_daily_outlook_preserves_order() {
        let snapshot = WeatherSnapshot {
            current: current(),
            daily: Some(vec![
                DailyOutlook {
                    date: "2026-08-06".to_string(),
                    weather_code: Some(0),
                    high: Some(24.0),
                    low: Some(13.5),
                },
                DailyOutlook {
                    date: "2026-08-07".to_string(),
                    weather_code: None,
                    high: None,
                    low: Some(14.1),
                },
            ]),
        };
        let days = snapshot.daily_outlook();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2026-08-06");
        assert!(days[1].high.is_none());
    }
}
