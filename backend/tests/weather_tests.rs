//! Weather snapshot contract tests
//!
//! Covers the normalized snapshot shape handed to the advisory engine:
//! clamping of percentage fields, finite-number validation, and the wire
//! format the retrieval layer emits.

use proptest::prelude::*;

use shared::{
    clamp_percent, validate_location, validate_weather_snapshot, WeatherSnapshot,
};

fn snapshot_json(temp: &str, humidity: &str, rain: &str) -> String {
    format!(
        r#"{{
            "location": {{"name": "Pune", "region": "Maharashtra", "country": "India"}},
            "current": {{
                "temp_c": {temp}, "condition": "Sunny", "condition_icon": "",
                "humidity": {humidity}, "wind_kph": 8.0, "precip_mm": 0.0,
                "feelslike_c": {temp}, "uv": 5.0
            }},
            "forecast": [
                {{
                    "date": "2024-07-01", "maxtemp_c": 33.0, "mintemp_c": 24.0,
                    "avgtemp_c": 29.0, "condition": "Sunny", "condition_icon": "",
                    "daily_chance_of_rain": {rain}, "totalprecip_mm": 0.0
                }}
            ]
        }}"#
    )
}

mod clamping {
    use super::*;

    #[test]
    fn clamp_percent_bounds_values() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(0.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(100.0), 100.0);
        assert_eq!(clamp_percent(130.0), 100.0);
    }

    proptest! {
        #[test]
        fn clamp_percent_always_lands_in_band(value in -1000.0..1000.0f64) {
            let clamped = clamp_percent(value);
            prop_assert!((0.0..=100.0).contains(&clamped));
        }
    }
}

mod validation {
    use super::*;

    #[test]
    fn finite_snapshot_passes() {
        let snapshot: WeatherSnapshot =
            serde_json::from_str(&snapshot_json("30.0", "75.0", "80.0")).unwrap();
        assert!(validate_weather_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn non_finite_temperature_is_rejected() {
        let mut snapshot: WeatherSnapshot =
            serde_json::from_str(&snapshot_json("30.0", "75.0", "80.0")).unwrap();
        snapshot.current.temp_c = f64::NAN;
        assert!(validate_weather_snapshot(&snapshot).is_err());
    }

    #[test]
    fn non_finite_humidity_is_rejected() {
        let mut snapshot: WeatherSnapshot =
            serde_json::from_str(&snapshot_json("30.0", "75.0", "80.0")).unwrap();
        snapshot.current.humidity = f64::INFINITY;
        assert!(validate_weather_snapshot(&snapshot).is_err());
    }

    #[test]
    fn non_finite_rain_chance_is_rejected() {
        let mut snapshot: WeatherSnapshot =
            serde_json::from_str(&snapshot_json("30.0", "75.0", "80.0")).unwrap();
        snapshot.forecast[0].daily_chance_of_rain = f64::NAN;
        assert!(validate_weather_snapshot(&snapshot).is_err());
    }

    #[test]
    fn out_of_band_values_are_still_valid_input() {
        // Out-of-range but finite values are the engine's job to clamp,
        // not validation's job to reject.
        let snapshot: WeatherSnapshot =
            serde_json::from_str(&snapshot_json("-60.0", "140.0", "150.0")).unwrap();
        assert!(validate_weather_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn blank_location_is_rejected() {
        assert!(validate_location("Lucknow").is_ok());
        assert!(validate_location("").is_err());
        assert!(validate_location("   ").is_err());
    }
}

mod wire_format {
    use super::*;

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot: WeatherSnapshot =
            serde_json::from_str(&snapshot_json("30.0", "75.0", "80.0")).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WeatherSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back.location.name, "Pune");
        assert_eq!(back.current.temp_c, 30.0);
        assert_eq!(back.forecast.len(), 1);
        assert_eq!(back.forecast[0].daily_chance_of_rain, 80.0);
    }
}
