//! HTTP handlers for crop advisory endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use shared::{CropProfile, CropRecommendation, WeatherSnapshot};

use crate::error::AppResult;
use crate::services::AdvisoryService;
use crate::AppState;

use super::weather::{weather_service, WeatherQuery};

/// Weather snapshot plus the ranked crop recommendations derived from it
#[derive(Debug, Serialize)]
pub struct AdvisoryResponse {
    pub weather: WeatherSnapshot,
    pub recommendations: Vec<CropRecommendation>,
}

/// Fetch weather for a location and rank the crop catalog against it
pub async fn get_crop_recommendations(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<AdvisoryResponse>> {
    let weather = weather_service(&state)?
        .get_forecast(
            &query.location,
            query.days,
            query.lang.unwrap_or_default(),
        )
        .await?;

    let recommendations = AdvisoryService::new().recommendations(&weather)?;

    Ok(Json(AdvisoryResponse {
        weather,
        recommendations,
    }))
}

/// Rank the crop catalog against a caller-supplied snapshot.
///
/// Pure scoring entry point: no provider call is made.
pub async fn score_snapshot(
    Json(snapshot): Json<WeatherSnapshot>,
) -> AppResult<Json<Vec<CropRecommendation>>> {
    let recommendations = AdvisoryService::new().recommendations(&snapshot)?;
    Ok(Json(recommendations))
}

/// List the static crop catalog
pub async fn list_crops() -> Json<&'static [CropProfile]> {
    Json(AdvisoryService::new().catalog())
}
