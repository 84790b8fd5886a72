//! Weather reshaping service
//!
//! Turns raw provider responses into the farmer-facing payloads: a
//! current-conditions snapshot with agricultural advice, and a daily
//! forecast aggregated from 3-hourly samples.

use chrono::DateTime;
use serde::Serialize;
use shared::advisory::agricultural_advice;

use crate::error::AppResult;
use crate::external::weather::{ForecastSample, LocationQuery, WeatherClient, WeatherCondition};

/// Maximum number of days returned in a forecast
pub const FORECAST_DAYS: usize = 5;

/// Weather service
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

/// Current conditions snapshot returned to the frontend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub temperature: TemperatureReport,
    pub humidity: i64,
    pub pressure: i64,
    pub wind: WindReport,
    pub weather: WeatherCondition,
    /// Visibility in kilometers
    pub visibility: f64,
    /// The current-weather API does not report UV index
    pub uv_index: String,
    pub agricultural_advice: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureReport {
    pub current: i64,
    pub feels_like: i64,
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WindReport {
    pub speed: f64,
    pub direction: f64,
}

/// Forecast response returned to the frontend
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub location: String,
    pub forecast: Vec<ForecastDay>,
}

/// One aggregated forecast day
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: String,
    pub temperature: DayTemperature,
    pub humidity: i64,
    pub wind_speed: f64,
    pub weather: WeatherCondition,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayTemperature {
    pub min: i64,
    pub max: i64,
    pub avg: i64,
}

fn round(value: f64) -> i64 {
    value.round() as i64
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Fetch current conditions and derive the agricultural snapshot
    pub async fn snapshot(&self, query: &LocationQuery) -> AppResult<WeatherReport> {
        let current = self.client.current(query).await?;

        let advice = agricultural_advice(
            current.temperature,
            current.humidity,
            current.wind_speed,
            &current.condition.main,
        );

        Ok(WeatherReport {
            location: current.location,
            temperature: TemperatureReport {
                current: round(current.temperature),
                feels_like: round(current.feels_like),
                min: round(current.temp_min),
                max: round(current.temp_max),
            },
            humidity: round(current.humidity),
            pressure: round(current.pressure),
            wind: WindReport {
                speed: current.wind_speed,
                direction: current.wind_direction,
            },
            weather: current.condition,
            visibility: current.visibility_meters.unwrap_or(10000.0) / 1000.0,
            uv_index: "N/A".to_string(),
            agricultural_advice: advice,
        })
    }

    /// Fetch the forecast and aggregate it into at most five days
    pub async fn daily_forecast(&self, query: &LocationQuery) -> AppResult<ForecastReport> {
        let raw = self.client.forecast(query).await?;

        Ok(ForecastReport {
            location: raw.location,
            forecast: group_daily(&raw.samples),
        })
    }
}

/// Group time-stamped samples by calendar day and aggregate each day.
///
/// Days appear in first-seen order. Per day: true min/max temperature,
/// rounded average temperature and humidity, average wind rounded to one
/// decimal, and the structurally-middle sample's condition as the
/// representative weather.
pub fn group_daily(samples: &[ForecastSample]) -> Vec<ForecastDay> {
    struct DayAccum {
        date: String,
        temps: Vec<f64>,
        humidity: Vec<f64>,
        wind: Vec<f64>,
        conditions: Vec<WeatherCondition>,
    }

    let mut days: Vec<DayAccum> = Vec::new();

    for sample in samples {
        let Some(timestamp) = DateTime::from_timestamp(sample.timestamp, 0) else {
            continue;
        };
        let date = timestamp.format("%a %b %d %Y").to_string();

        let idx = match days.iter().position(|d| d.date == date) {
            Some(idx) => idx,
            None => {
                days.push(DayAccum {
                    date,
                    temps: Vec::new(),
                    humidity: Vec::new(),
                    wind: Vec::new(),
                    conditions: Vec::new(),
                });
                days.len() - 1
            }
        };

        let day = &mut days[idx];
        day.temps.push(sample.temperature);
        day.humidity.push(sample.humidity);
        day.wind.push(sample.wind_speed);
        day.conditions.push(sample.condition.clone());
    }

    days.into_iter()
        .take(FORECAST_DAYS)
        .map(|day| {
            let count = day.temps.len() as f64;
            let min = day.temps.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = day.temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let avg_temp = day.temps.iter().sum::<f64>() / count;
            let avg_humidity = day.humidity.iter().sum::<f64>() / count;
            let avg_wind = day.wind.iter().sum::<f64>() / count;
            // Midday representative: structurally-middle sample
            let weather = day.conditions[day.conditions.len() / 2].clone();

            ForecastDay {
                date: day.date,
                temperature: DayTemperature {
                    min: round(min),
                    max: round(max),
                    avg: round(avg_temp),
                },
                humidity: round(avg_humidity),
                wind_speed: (avg_wind * 10.0).round() / 10.0,
                weather,
            }
        })
        .collect()
}
