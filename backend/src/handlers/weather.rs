//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::external::weather::LocationQuery;
use crate::services::weather::{ForecastReport, WeatherReport, WeatherService};
use crate::AppState;

/// Query parameters: coordinates or a city name
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
}

impl WeatherQuery {
    /// Resolve into a location query; exactly one form is required
    fn location(&self) -> AppResult<LocationQuery> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Ok(LocationQuery::Coordinates { lat, lon });
        }
        if let Some(city) = self.city.as_deref() {
            if !city.trim().is_empty() {
                return Ok(LocationQuery::City(city.trim().to_string()));
            }
        }
        Err(AppError::MissingLocation)
    }
}

fn weather_service(state: &AppState) -> AppResult<WeatherService> {
    if state.config.weather.api_key.is_empty() {
        return Err(AppError::Configuration(
            "Weather API key not configured".to_string(),
        ));
    }
    Ok(WeatherService::new(state.weather.clone()))
}

/// Current weather with agricultural advice
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherReport>> {
    let location = query.location()?;
    let service = weather_service(&state)?;
    let report = service.snapshot(&location).await?;
    Ok(Json(report))
}

/// 5-day forecast aggregated by calendar day
pub async fn weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<ForecastReport>> {
    let location = query.location()?;
    let service = weather_service(&state)?;
    let report = service.daily_forecast(&location).await?;
    Ok(Json(report))
}
