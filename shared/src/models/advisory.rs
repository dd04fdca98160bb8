//! Crop suitability scoring and ranking
//!
//! Pure functions: one weather snapshot in, one ranked recommendation per
//! catalog crop out. No I/O and no shared mutable state, so the engine may be
//! called concurrently without coordination.

use serde::{Deserialize, Serialize};

use crate::models::crop::{crop_catalog, CropProfile, RainTolerance};
use crate::models::weather::{DayForecast, WeatherSnapshot};
use crate::types::Language;
use crate::validation::clamp_percent;

/// Decay margin for temperatures outside the ideal band (degrees Celsius)
const TEMP_DECAY_MARGIN: f64 = 15.0;

/// Decay margin for humidity outside the ideal band (percentage points)
const HUMIDITY_DECAY_MARGIN: f64 = 30.0;

/// Factor weights: temperature dominates, humidity and rain are co-equal
const TEMP_WEIGHT: f64 = 0.4;
const HUMIDITY_WEIGHT: f64 = 0.3;
const RAIN_WEIGHT: f64 = 0.3;

/// Final suitability bounds; no crop reports below 10 or above 90
const SUITABILITY_MIN: f64 = 10.0;
const SUITABILITY_MAX: f64 = 90.0;

/// Qualitative suitability tier derived from the final percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityLevel {
    High,
    Medium,
    Low,
}

impl SuitabilityLevel {
    /// Tier assignment: high >= 75, medium >= 50, low otherwise
    pub fn from_percent(suitability: i32) -> Self {
        if suitability >= 75 {
            SuitabilityLevel::High
        } else if suitability >= 50 {
            SuitabilityLevel::Medium
        } else {
            SuitabilityLevel::Low
        }
    }
}

/// A ranked crop recommendation for one weather snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub name: String,
    pub name_hi: String,
    /// Suitability percentage, always within 10-90
    pub suitability: i32,
    pub level: SuitabilityLevel,
    pub reason: String,
    pub reason_hi: String,
    pub advice: String,
    pub advice_hi: String,
}

impl CropRecommendation {
    pub fn localized_name(&self, language: Language) -> &str {
        match language {
            Language::English => &self.name,
            Language::Hindi => &self.name_hi,
        }
    }

    pub fn localized_reason(&self, language: Language) -> &str {
        match language {
            Language::English => &self.reason,
            Language::Hindi => &self.reason_hi,
        }
    }

    pub fn localized_advice(&self, language: Language) -> &str {
        match language {
            Language::English => &self.advice,
            Language::Hindi => &self.advice_hi,
        }
    }
}

/// Score a value against an ideal band with a linear decay margin.
///
/// Returns 1.0 inside the band, otherwise decays linearly with the distance
/// to the nearer bound and floors at 0.
fn band_score(value: f64, min: f64, max: f64, margin: f64) -> f64 {
    if value >= min && value <= max {
        return 1.0;
    }
    let distance = if value < min { min - value } else { value - max };
    (1.0 - distance / margin).max(0.0)
}

/// Temperature suitability in [0, 1]; decays to 0 over 15 degrees outside
/// the ideal band. Total over any finite temperature, in-band or not.
pub fn temperature_score(temp_c: f64, ideal_min: f64, ideal_max: f64) -> f64 {
    band_score(temp_c, ideal_min, ideal_max, TEMP_DECAY_MARGIN)
}

/// Humidity suitability in [0, 1]; decays to 0 over 30 percentage points
/// outside the ideal band.
pub fn humidity_score(humidity: f64, ideal_min: f64, ideal_max: f64) -> f64 {
    band_score(humidity, ideal_min, ideal_max, HUMIDITY_DECAY_MARGIN)
}

/// Rain suitability in [0, 1] as a tolerance-dependent step function over
/// the mean forecast daily rain chance.
///
/// Rain-loving crops are only mildly penalized by dry conditions and never
/// by wet ones; rain-sensitive crops lose suitability once the chance
/// crosses moderate thresholds.
pub fn rain_score(avg_rain_chance: f64, tolerance: RainTolerance) -> f64 {
    match tolerance {
        RainTolerance::High => {
            if avg_rain_chance > 30.0 {
                1.0
            } else {
                0.7
            }
        }
        RainTolerance::Medium => {
            if avg_rain_chance > 70.0 {
                0.5
            } else if avg_rain_chance > 30.0 {
                1.0
            } else {
                0.8
            }
        }
        RainTolerance::Low => {
            if avg_rain_chance > 60.0 {
                0.3
            } else if avg_rain_chance > 30.0 {
                0.7
            } else {
                1.0
            }
        }
    }
}

/// Mean daily rain chance across the forecast; 0 when the forecast is empty.
/// Each day's chance is clamped to 0-100 before averaging.
pub fn average_rain_chance(forecast: &[DayForecast]) -> f64 {
    if forecast.is_empty() {
        return 0.0;
    }
    let total: f64 = forecast
        .iter()
        .map(|day| clamp_percent(day.daily_chance_of_rain))
        .sum();
    total / forecast.len() as f64
}

/// Score one crop profile against a snapshot and build its recommendation.
fn score_crop(
    profile: &CropProfile,
    temp_c: f64,
    humidity: f64,
    avg_rain_chance: f64,
) -> CropRecommendation {
    let temp = temperature_score(temp_c, profile.ideal_temp_min, profile.ideal_temp_max);
    let humid = humidity_score(humidity, profile.ideal_humidity_min, profile.ideal_humidity_max);
    let rain = rain_score(avg_rain_chance, profile.rain_tolerance);

    let raw = (temp * TEMP_WEIGHT + humid * HUMIDITY_WEIGHT + rain * RAIN_WEIGHT) * 90.0;
    // Half-up rounding; raw is clamped positive so round() never rounds away
    // from the 10-90 band.
    let suitability = raw.clamp(SUITABILITY_MIN, SUITABILITY_MAX).round() as i32;
    let level = SuitabilityLevel::from_percent(suitability);

    CropRecommendation {
        name: profile.name.to_string(),
        name_hi: profile.name_hi.to_string(),
        suitability,
        level,
        reason: profile.reason_en.to_string(),
        reason_hi: profile.reason_hi.to_string(),
        advice: profile.advice_en.to_string(),
        advice_hi: profile.advice_hi.to_string(),
    }
}

/// Rank the full crop catalog against one weather snapshot.
///
/// Produces exactly one recommendation per catalog entry, sorted by
/// suitability descending. The sort is stable, so crops with equal
/// suitability keep their catalog order and repeat calls with the same
/// snapshot produce identical output.
///
/// Humidity and rain chances are clamped to 0-100 before scoring; the
/// temperature is used as given and the decay formula floors at 0.
pub fn recommend_crops(weather: &WeatherSnapshot) -> Vec<CropRecommendation> {
    let temp_c = weather.current.temp_c;
    let humidity = clamp_percent(weather.current.humidity);
    let avg_rain_chance = average_rain_chance(&weather.forecast);

    let mut recommendations: Vec<CropRecommendation> = crop_catalog()
        .iter()
        .map(|profile| score_crop(profile, temp_c, humidity, avg_rain_chance))
        .collect();

    recommendations.sort_by(|a, b| b.suitability.cmp(&a.suitability));
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_score_is_one_inside_and_at_bounds() {
        assert_eq!(band_score(20.0, 20.0, 37.0, 15.0), 1.0);
        assert_eq!(band_score(37.0, 20.0, 37.0, 15.0), 1.0);
        assert_eq!(band_score(30.0, 20.0, 37.0, 15.0), 1.0);
    }

    #[test]
    fn band_score_decays_and_floors_at_zero() {
        // 5 below the lower bound with a 15-point margin
        let score = band_score(15.0, 20.0, 37.0, 15.0);
        assert!((score - (1.0 - 5.0 / 15.0)).abs() < 1e-9);
        // far outside the margin
        assert_eq!(band_score(-40.0, 20.0, 37.0, 15.0), 0.0);
        assert_eq!(band_score(120.0, 20.0, 37.0, 15.0), 0.0);
    }

    #[test]
    fn rain_score_step_boundaries_are_exclusive() {
        // Thresholds use strict comparisons: exactly 30 counts as dry.
        assert_eq!(rain_score(30.0, RainTolerance::High), 0.7);
        assert_eq!(rain_score(30.0, RainTolerance::Medium), 0.8);
        assert_eq!(rain_score(30.0, RainTolerance::Low), 1.0);
        assert_eq!(rain_score(60.0, RainTolerance::Low), 0.7);
        assert_eq!(rain_score(70.0, RainTolerance::Medium), 1.0);
    }
}
