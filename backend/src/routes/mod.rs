//! Route definitions for the Farm Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Weather lookups
        .nest("/weather", weather_routes())
        // Static crop catalog
        .nest("/crops", crop_routes())
        // Crop advisory
        .nest("/advisory", advisory_routes())
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::get_weather))
}

/// Crop catalog routes
fn crop_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::list_crops))
}

/// Advisory routes
fn advisory_routes() -> Router<AppState> {
    Router::new()
        .route("/recommendations", get(handlers::get_crop_recommendations))
        .route("/score", post(handlers::score_snapshot))
}
