//! Weather data models
//!
//! `WeatherSnapshot` is the normalized current-conditions-plus-forecast shape
//! produced by the weather retrieval layer and consumed by the advisory
//! engine. Percentage fields are clamped to 0-100 during normalization; the
//! engine clamps again before scoring so caller-supplied snapshots are safe
//! too.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Resolved location for a weather snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherLocation {
    pub name: String,
    pub region: String,
    pub country: String,
}

/// Current conditions at the requested location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub condition: String,
    pub condition_icon: String,
    /// Relative humidity in percent (0-100)
    pub humidity: f64,
    pub wind_kph: f64,
    pub precip_mm: f64,
    pub feelslike_c: f64,
    pub uv: f64,
}

/// One day of forecast data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub avgtemp_c: f64,
    pub condition: String,
    pub condition_icon: String,
    /// Chance of rain for the day in percent (0-100)
    pub daily_chance_of_rain: f64,
    pub totalprecip_mm: f64,
}

/// Severe weather alert issued by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub headline: String,
    pub event: String,
    pub desc: String,
}

/// A weather snapshot: current conditions plus a short-range daily forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: WeatherLocation,
    pub current: CurrentConditions,
    pub forecast: Vec<DayForecast>,
    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The snapshot must deserialize from the wire shape the retrieval layer
    /// emits (same field names the frontend consumes).
    #[test]
    fn snapshot_deserializes_from_wire_format() {
        let json = r#"{
            "location": {"name": "Lucknow", "region": "Uttar Pradesh", "country": "India"},
            "current": {
                "temp_c": 30.0, "condition": "Partly cloudy", "condition_icon": "//cdn/icon.png",
                "humidity": 75.0, "wind_kph": 12.2, "precip_mm": 0.0,
                "feelslike_c": 33.5, "uv": 7.0
            },
            "forecast": [
                {
                    "date": "2024-07-01", "maxtemp_c": 34.0, "mintemp_c": 26.0,
                    "avgtemp_c": 30.0, "condition": "Rain", "condition_icon": "//cdn/rain.png",
                    "daily_chance_of_rain": 80.0, "totalprecip_mm": 12.4
                }
            ]
        }"#;

        let snapshot: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.location.name, "Lucknow");
        assert_eq!(snapshot.current.temp_c, 30.0);
        assert_eq!(snapshot.current.humidity, 75.0);
        assert_eq!(snapshot.forecast.len(), 1);
        assert_eq!(snapshot.forecast[0].daily_chance_of_rain, 80.0);
        // alerts are optional on the wire
        assert!(snapshot.alerts.is_empty());
    }
}
