//! Weather service for retrieving normalized weather snapshots

use shared::{validate_location, Language, WeatherSnapshot};

use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherClient;

/// WeatherAPI.com caps forecast requests at 10 days
const MAX_FORECAST_DAYS: u8 = 10;

/// Weather service wrapping the provider client
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    default_days: u8,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(client: WeatherClient, default_days: u8) -> Self {
        Self {
            client,
            default_days,
        }
    }

    /// Fetch a normalized weather snapshot for a location.
    ///
    /// `days` falls back to the configured default and is bounded to the
    /// provider's supported horizon.
    pub async fn get_forecast(
        &self,
        location: &str,
        days: Option<u8>,
        language: Language,
    ) -> AppResult<WeatherSnapshot> {
        validate_location(location).map_err(|msg| AppError::Validation {
            field: "location".to_string(),
            message: msg.to_string(),
            message_hi: "स्थान आवश्यक है".to_string(),
        })?;

        let days = bound_forecast_days(days.unwrap_or(self.default_days));

        tracing::info!("Fetching {}-day forecast for {}", days, location);
        self.client.get_forecast(location, days, language).await
    }
}

/// Bound a requested forecast horizon to what the provider supports
pub fn bound_forecast_days(days: u8) -> u8 {
    days.clamp(1, MAX_FORECAST_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_days_are_bounded() {
        assert_eq!(bound_forecast_days(0), 1);
        assert_eq!(bound_forecast_days(1), 1);
        assert_eq!(bound_forecast_days(7), 7);
        assert_eq!(bound_forecast_days(10), 10);
        assert_eq!(bound_forecast_days(30), 10);
    }
}
