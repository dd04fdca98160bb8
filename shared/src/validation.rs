//! Validation utilities for the Farm Advisory Platform
//!
//! The scoring engine is total over finite inputs; these checks guard the
//! boundary where snapshots arrive from callers or the weather provider.

use crate::models::{CropProfile, WeatherSnapshot};

/// Clamp a percentage value to the 0-100 range.
///
/// The single clamping policy used everywhere percentages enter the system:
/// provider normalization and engine inputs.
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Validate that every numeric field of a snapshot the engine reads is
/// finite. Non-finite values have no defined scoring behavior and are
/// rejected here rather than propagated.
pub fn validate_weather_snapshot(snapshot: &WeatherSnapshot) -> Result<(), &'static str> {
    if !snapshot.current.temp_c.is_finite() {
        return Err("Current temperature must be a finite number");
    }
    if !snapshot.current.humidity.is_finite() {
        return Err("Current humidity must be a finite number");
    }
    for day in &snapshot.forecast {
        if !day.daily_chance_of_rain.is_finite() {
            return Err("Forecast rain chance must be a finite number");
        }
    }
    Ok(())
}

/// Validate a catalog entry's ideal ranges.
///
/// A violation is a catalog-authoring bug, not a runtime condition; this is
/// exercised by tests over the static catalog.
pub fn validate_crop_profile(profile: &CropProfile) -> Result<(), &'static str> {
    if profile.ideal_temp_min > profile.ideal_temp_max {
        return Err("Ideal temperature range is inverted");
    }
    if profile.ideal_humidity_min > profile.ideal_humidity_max {
        return Err("Ideal humidity range is inverted");
    }
    if profile.ideal_humidity_min < 0.0 || profile.ideal_humidity_max > 100.0 {
        return Err("Ideal humidity range must lie within 0-100");
    }
    Ok(())
}

/// Validate a location query string
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    if location.trim().is_empty() {
        return Err("Location is required");
    }
    Ok(())
}
