//! Shared helpers for integration tests
//!
//! Builds the full application against unreachable upstream endpoints:
//! the generative AI client falls back to its canned reply, and the ML
//! prediction client reports no prediction, so tests exercise real
//! request handling without any network dependency.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use farm_advisory_backend::config::{Config, GeminiConfig, MlConfig, ServerConfig, WeatherConfig};
use farm_advisory_backend::{create_app, AppState};

/// Configuration with no API keys and unroutable upstream addresses
pub fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            static_dir: "public".to_string(),
        },
        gemini: GeminiConfig {
            api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
        },
        weather: WeatherConfig {
            api_key: String::new(),
            base_url: "http://127.0.0.1:9".to_string(),
        },
        ml: MlConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        },
    }
}

pub fn test_state() -> AppState {
    AppState::from_config(test_config())
}

pub fn test_app() -> Router {
    create_app(test_state())
}

/// Send a JSON body and decode the JSON response
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");

    send(app, request).await
}

/// Send a GET request and decode the JSON response
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request");

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, json)
}
