//! Route definitions for the Farm Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Multi-turn farming assistant chat
        .route("/chat", post(handlers::send_chat_message))
        // Soil-based crop advisory (ML prediction + AI advice)
        .route("/crop-advisory", post(handlers::crop_advisory))
        // Current weather with agricultural advice
        .route("/weather", get(handlers::current_weather))
        // 5-day forecast grouped by calendar day
        .route("/weather/forecast", get(handlers::weather_forecast))
        // Heuristic irrigation decision
        .route("/predict-irrigation", post(handlers::predict_irrigation))
}
