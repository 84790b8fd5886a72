//! Weather API client for fetching weather data
//!
//! Integrates with an OpenWeatherMap-style API for current conditions and
//! 5-day forecasts, queried by GPS coordinates or city name. Unlike the
//! chat path, upstream failures here surface as distinct errors.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Location of a weather request: coordinates or a city name
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coordinates { lat: f64, lon: f64 },
    City(String),
}

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Current conditions as reported by the provider
#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub location: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub condition: WeatherCondition,
    /// Visibility in meters, when reported
    pub visibility_meters: Option<f64>,
}

/// Primary weather condition descriptor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherCondition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// One time-stamped forecast sample (3-hourly from the provider)
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    /// Unix timestamp in seconds
    pub timestamp: i64,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub condition: WeatherCondition,
}

/// Raw multi-sample forecast for a location
#[derive(Debug, Clone)]
pub struct RawForecast {
    pub location: String,
    pub samples: Vec<ForecastSample>,
}

/// Provider response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    name: String,
    sys: OwmSys,
    main: OwmMain,
    wind: OwmWind,
    weather: Vec<OwmCondition>,
    visibility: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    temp_min: f64,
    #[serde(default)]
    temp_max: f64,
    #[serde(default)]
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    main: String,
    description: String,
    icon: String,
}

/// Provider response for the multi-sample forecast
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    city: OwmCity,
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmCity {
    name: String,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    wind: OwmWind,
    weather: Vec<OwmCondition>,
}

impl From<OwmCondition> for WeatherCondition {
    fn from(c: OwmCondition) -> Self {
        WeatherCondition {
            main: c.main,
            description: c.description,
            icon: c.icon,
        }
    }
}

fn location_label(name: &str, country: Option<&str>) -> String {
    match country {
        Some(country) => format!("{}, {}", name, country),
        None => name.to_string(),
    }
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> Self {
        Self::with_base_url(config.api_key.clone(), config.base_url.clone())
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url,
        }
    }

    fn request_url(&self, endpoint: &str, query: &LocationQuery) -> String {
        match query {
            LocationQuery::Coordinates { lat, lon } => format!(
                "{}/{}?lat={}&lon={}&appid={}&units=metric",
                self.base_url, endpoint, lat, lon, self.api_key
            ),
            LocationQuery::City(city) => format!(
                "{}/{}?q={}&appid={}&units=metric",
                self.base_url,
                endpoint,
                urlencode(city),
                self.api_key
            ),
        }
    }

    /// Fetch current weather conditions
    pub async fn current(&self, query: &LocationQuery) -> AppResult<CurrentConditions> {
        let url = self.request_url("weather", query);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::WeatherUnavailable {
                details: e.to_string(),
            }
        })?;

        let response = Self::check_status(response).await?;

        let data: OwmCurrentResponse =
            response
                .json()
                .await
                .map_err(|e| AppError::WeatherUnavailable {
                    details: format!("Failed to parse weather response: {}", e),
                })?;

        let condition = data
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| AppError::WeatherUnavailable {
                details: "Weather response contained no conditions".to_string(),
            })?;

        Ok(CurrentConditions {
            location: location_label(&data.name, data.sys.country.as_deref()),
            temperature: data.main.temp,
            feels_like: data.main.feels_like,
            temp_min: data.main.temp_min,
            temp_max: data.main.temp_max,
            humidity: data.main.humidity,
            pressure: data.main.pressure,
            wind_speed: data.wind.speed,
            wind_direction: data.wind.deg.unwrap_or(0.0),
            condition: condition.into(),
            visibility_meters: data.visibility,
        })
    }

    /// Fetch the multi-sample forecast
    pub async fn forecast(&self, query: &LocationQuery) -> AppResult<RawForecast> {
        let url = self.request_url("forecast", query);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::ForecastUnavailable {
                details: e.to_string(),
            }
        })?;

        let response = Self::check_status(response).await?;

        let data: OwmForecastResponse =
            response
                .json()
                .await
                .map_err(|e| AppError::ForecastUnavailable {
                    details: format!("Failed to parse forecast response: {}", e),
                })?;

        let samples = data
            .list
            .into_iter()
            .filter_map(|item| {
                let condition = item.weather.into_iter().next()?;
                Some(ForecastSample {
                    timestamp: item.dt,
                    temperature: item.main.temp,
                    humidity: item.main.humidity,
                    wind_speed: item.wind.speed,
                    condition: condition.into(),
                })
            })
            .collect();

        Ok(RawForecast {
            location: location_label(&data.city.name, data.city.country.as_deref()),
            samples,
        })
    }

    /// Map upstream status codes onto the error taxonomy
    async fn check_status(response: reqwest::Response) -> AppResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            404 => Err(AppError::CityNotFound),
            401 => Err(AppError::InvalidApiKey),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(AppError::WeatherUnavailable {
                    details: format!("{} - {}", status, body),
                })
            }
        }
    }
}

/// Percent-encode a city name for use in a query string
fn urlencode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
