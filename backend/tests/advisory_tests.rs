//! Crop advisory endpoint tests
//!
//! Both upstreams are unreachable: the ML prediction comes back empty
//! (default crop list applies) and the AI advice is the fallback reply.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::post_json;
use farm_advisory_backend::external::generative_ai::AI_UNAVAILABLE_REPLY;
use farm_advisory_backend::services::advisory::DEFAULT_CROPS;

#[tokio::test]
async fn test_missing_soil_data_is_rejected() {
    let (status, body) = post_json(common::test_app(), "/api/crop-advisory", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Soil data is required");
}

#[tokio::test]
async fn test_invalid_soil_ph_is_rejected() {
    let (status, body) = post_json(
        common::test_app(),
        "/api/crop-advisory",
        json!({"soilData": {"soil_ph": 19.0}}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_empty_readings_get_documented_defaults() {
    let (status, body) = post_json(
        common::test_app(),
        "/api/crop-advisory",
        json!({"soilData": {}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Unknown");
    assert_eq!(body["soilData"]["soil_ph"], 6.5);
    assert_eq!(body["soilData"]["nitrogen"], 50.0);
    assert_eq!(body["soilData"]["rainfall"], 1000.0);
    assert_eq!(body["soilData"]["region"], "tropical");
    assert_eq!(body["soilData"]["crop_type"], "rice");
}

#[tokio::test]
async fn test_unreachable_upstreams_fall_back() {
    let (status, body) = post_json(
        common::test_app(),
        "/api/crop-advisory",
        json!({
            "soilData": {"soil_ph": 6.8, "nitrogen": 90.0},
            "location": "Kerala",
            "cropType": "banana"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Kerala");
    assert_eq!(body["soilData"]["crop_type"], "banana");
    assert_eq!(body["mlPrediction"], serde_json::Value::Null);
    assert_eq!(body["aiAdvice"], AI_UNAVAILABLE_REPLY);

    let best_crops: Vec<&str> = body["recommendations"]["bestCrops"]
        .as_array()
        .expect("bestCrops")
        .iter()
        .filter_map(|c| c.as_str())
        .collect();
    assert_eq!(best_crops, DEFAULT_CROPS);

    assert_eq!(
        body["recommendations"]["irrigation"],
        "Maintain consistent moisture levels"
    );
    assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
}
