//! Farm Advisory Platform - Backend
//!
//! A thin API server for farmers: multi-turn AI chat, weather with
//! agricultural advice, soil-based crop advisory, and heuristic
//! irrigation decisions, in front of a static frontend.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{CropModelClient, GenerativeAiClient, WeatherClient};
use services::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<SessionStore>,
    pub ai: GenerativeAiClient,
    pub weather: WeatherClient,
    pub crop_model: CropModelClient,
}

impl AppState {
    /// Build application state from configuration
    pub fn from_config(config: Config) -> Self {
        let ai = GenerativeAiClient::new(&config.gemini);
        let weather = WeatherClient::new(&config.weather);
        let crop_model = CropModelClient::new(&config.ml);

        Self {
            config: Arc::new(config),
            sessions: Arc::new(SessionStore::new()),
            ai,
            weather,
            crop_model,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
