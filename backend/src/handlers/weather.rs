//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::{Language, WeatherSnapshot};

use crate::error::{AppError, AppResult};
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for weather and advisory lookups
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: String,
    pub days: Option<u8>,
    pub lang: Option<Language>,
}

/// Build a weather service from application state, failing when no API key
/// is configured.
pub(crate) fn weather_service(state: &AppState) -> AppResult<WeatherService> {
    if state.config.weather.api_key.is_empty() {
        return Err(AppError::Configuration(
            "Weather API key not configured".to_string(),
        ));
    }
    Ok(WeatherService::new(
        state.weather.clone(),
        state.config.weather.forecast_days,
    ))
}

/// Get current conditions and forecast for a location
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherSnapshot>> {
    let service = weather_service(&state)?;
    let snapshot = service
        .get_forecast(
            &query.location,
            query.days,
            query.lang.unwrap_or_default(),
        )
        .await?;
    Ok(Json(snapshot))
}
