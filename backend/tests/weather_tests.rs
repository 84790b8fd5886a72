//! Weather endpoint and forecast aggregation tests

mod common;

use axum::http::StatusCode;
use proptest::prelude::*;

use common::get_json;
use farm_advisory_backend::external::weather::{ForecastSample, WeatherCondition};
use farm_advisory_backend::services::weather::{group_daily, FORECAST_DAYS};

// ============================================================================
// Endpoint validation
// ============================================================================

#[tokio::test]
async fn test_missing_location_is_rejected() {
    let (status, body) = get_json(common::test_app(), "/api/weather").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Please provide either 'lat' and 'lon' coordinates or 'city' name"
    );
}

#[tokio::test]
async fn test_lat_without_lon_is_rejected() {
    let (status, _) = get_json(common::test_app(), "/api/weather?lat=9.93").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_forecast_missing_location_is_rejected() {
    let (status, body) = get_json(common::test_app(), "/api/weather/forecast").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Please provide either 'lat' and 'lon' coordinates or 'city' name"
    );
}

#[tokio::test]
async fn test_unconfigured_api_key_is_a_server_error() {
    let (status, body) = get_json(common::test_app(), "/api/weather?city=Kochi").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Weather API key not configured");
}

#[tokio::test]
async fn test_forecast_unconfigured_api_key_is_a_server_error() {
    let (status, body) =
        get_json(common::test_app(), "/api/weather/forecast?lat=9.93&lon=76.26").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Weather API key not configured");
}

// ============================================================================
// Daily aggregation properties
// ============================================================================

const DAY: i64 = 86_400;
// 2024-01-15 00:00:00 UTC
const BASE: i64 = 1_705_276_800;

fn sample(timestamp: i64, temp: f64, humidity: f64, wind: f64) -> ForecastSample {
    ForecastSample {
        timestamp,
        temperature: temp,
        humidity,
        wind_speed: wind,
        condition: WeatherCondition {
            main: "Clear".to_string(),
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
        },
    }
}

proptest! {
    /// D distinct days in produce min(D, 5) days out
    #[test]
    fn prop_day_count_capped(day_count in 1usize..10, samples_per_day in 1usize..8) {
        let samples: Vec<ForecastSample> = (0..day_count)
            .flat_map(|d| {
                (0..samples_per_day).map(move |s| {
                    sample(BASE + d as i64 * DAY + s as i64 * 3600, 20.0, 50.0, 3.0)
                })
            })
            .collect();

        let days = group_daily(&samples);
        prop_assert_eq!(days.len(), day_count.min(FORECAST_DAYS));
    }

    /// Per-day min/max are the true extremes and avg is the arithmetic mean
    #[test]
    fn prop_day_extremes_and_mean(temps in prop::collection::vec(-10.0f64..45.0, 1..8)) {
        let samples: Vec<ForecastSample> = temps
            .iter()
            .enumerate()
            .map(|(i, &t)| sample(BASE + i as i64 * 3600, t, 50.0, 3.0))
            .collect();

        let days = group_daily(&samples);
        prop_assert_eq!(days.len(), 1);

        let true_min = temps.iter().cloned().fold(f64::INFINITY, f64::min);
        let true_max = temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let true_avg = temps.iter().sum::<f64>() / temps.len() as f64;

        prop_assert_eq!(days[0].temperature.min, true_min.round() as i64);
        prop_assert_eq!(days[0].temperature.max, true_max.round() as i64);
        prop_assert_eq!(days[0].temperature.avg, true_avg.round() as i64);
    }
}

#[test]
fn test_samples_spanning_midnight_split_into_two_days() {
    let samples = vec![
        sample(BASE + DAY - 3600, 10.0, 50.0, 3.0), // 23:00 day one
        sample(BASE + DAY + 3600, 30.0, 50.0, 3.0), // 01:00 day two
    ];

    let days = group_daily(&samples);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].temperature.max, 10);
    assert_eq!(days[1].temperature.min, 30);
}
