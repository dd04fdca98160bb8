//! Weather API client for fetching weather data
//!
//! Integrates with WeatherAPI.com for current conditions and daily forecasts,
//! normalized into the shared `WeatherSnapshot` shape the advisory engine
//! consumes. Percentage fields are clamped to 0-100 during normalization.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use shared::{
    clamp_percent, CurrentConditions, DayForecast, Language, WeatherAlert, WeatherLocation,
    WeatherSnapshot,
};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// WeatherAPI.com forecast response
#[derive(Debug, Deserialize)]
struct WApiForecastResponse {
    location: WApiLocation,
    current: WApiCurrent,
    forecast: WApiForecast,
    alerts: Option<WApiAlerts>,
}

#[derive(Debug, Deserialize)]
struct WApiLocation {
    name: String,
    region: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WApiCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WApiCurrent {
    temp_c: f64,
    condition: WApiCondition,
    humidity: f64,
    wind_kph: f64,
    precip_mm: f64,
    feelslike_c: f64,
    uv: f64,
}

#[derive(Debug, Deserialize)]
struct WApiForecast {
    forecastday: Vec<WApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WApiForecastDay {
    date: NaiveDate,
    day: WApiDay,
}

#[derive(Debug, Deserialize)]
struct WApiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    avgtemp_c: f64,
    condition: WApiCondition,
    daily_chance_of_rain: f64,
    totalprecip_mm: f64,
}

#[derive(Debug, Deserialize)]
struct WApiAlerts {
    #[serde(default)]
    alert: Vec<WApiAlert>,
}

#[derive(Debug, Deserialize)]
struct WApiAlert {
    headline: String,
    event: String,
    desc: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.weatherapi.com/v1".to_string(),
        }
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current conditions plus a daily forecast for a location.
    ///
    /// `location` is anything the provider resolves (city name, postcode,
    /// "lat,lon"). Condition text is requested in the given language.
    pub async fn get_forecast(
        &self,
        location: &str,
        days: u8,
        language: Language,
    ) -> AppResult<WeatherSnapshot> {
        let url = format!("{}/forecast.json", self.base_url);
        let days_param = days.to_string();
        let mut params = vec![
            ("key", self.api_key.as_str()),
            ("q", location),
            ("days", days_param.as_str()),
            ("aqi", "no"),
            ("alerts", "yes"),
        ];
        if language != Language::English {
            params.push(("lang", language.code()));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: WApiForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse weather response: {}", e)))?;

        Ok(convert_forecast_response(data))
    }
}

/// Convert a WeatherAPI.com response to the normalized snapshot shape
fn convert_forecast_response(data: WApiForecastResponse) -> WeatherSnapshot {
    let forecast = data
        .forecast
        .forecastday
        .into_iter()
        .map(|day| DayForecast {
            date: day.date,
            maxtemp_c: day.day.maxtemp_c,
            mintemp_c: day.day.mintemp_c,
            avgtemp_c: day.day.avgtemp_c,
            condition: day.day.condition.text,
            condition_icon: day.day.condition.icon,
            daily_chance_of_rain: clamp_percent(day.day.daily_chance_of_rain),
            totalprecip_mm: day.day.totalprecip_mm,
        })
        .collect();

    let alerts = data
        .alerts
        .map(|alerts| {
            alerts
                .alert
                .into_iter()
                .map(|alert| WeatherAlert {
                    headline: alert.headline,
                    event: alert.event,
                    desc: alert.desc,
                })
                .collect()
        })
        .unwrap_or_default();

    WeatherSnapshot {
        location: WeatherLocation {
            name: data.location.name,
            region: data.location.region,
            country: data.location.country,
        },
        current: CurrentConditions {
            temp_c: data.current.temp_c,
            condition: data.current.condition.text,
            condition_icon: data.current.condition.icon,
            humidity: clamp_percent(data.current.humidity),
            wind_kph: data.current.wind_kph,
            precip_mm: data.current.precip_mm,
            feelslike_c: data.current.feelslike_c,
            uv: data.current.uv,
        },
        forecast,
        alerts,
    }
}
