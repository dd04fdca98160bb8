//! Crop advisory service
//!
//! Thin wrapper over the pure scoring engine in `shared`: validates the
//! snapshot at the service boundary, then ranks the static catalog.

use shared::{
    crop_catalog, recommend_crops, validate_weather_snapshot, CropProfile, CropRecommendation,
    WeatherSnapshot,
};

use crate::error::{AppError, AppResult};

/// Crop advisory service
#[derive(Clone, Default)]
pub struct AdvisoryService;

impl AdvisoryService {
    /// Create a new AdvisoryService instance
    pub fn new() -> Self {
        Self
    }

    /// Rank the crop catalog against a weather snapshot.
    ///
    /// Returns one recommendation per catalog crop, sorted by suitability
    /// descending with catalog order preserved on ties.
    pub fn recommendations(
        &self,
        weather: &WeatherSnapshot,
    ) -> AppResult<Vec<CropRecommendation>> {
        validate_weather_snapshot(weather)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        Ok(recommend_crops(weather))
    }

    /// The static crop catalog, in authoring order
    pub fn catalog(&self) -> &'static [CropProfile] {
        crop_catalog()
    }
}
