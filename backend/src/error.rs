//! Error handling for the Farm Advisory Platform
//!
//! Client input errors and upstream weather failures surface as structured
//! `{error, details?}` JSON responses. Generative AI failures deliberately
//! never reach this module: the chat path recovers them into a fallback
//! reply string so the farmer always gets an answer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client input errors
    #[error("{0}")]
    MissingField(&'static str),

    #[error("Missing location")]
    MissingLocation,

    #[error("Validation error: {0}")]
    Validation(String),

    // Upstream weather provider errors
    #[error("City not found")]
    CityNotFound,

    #[error("Invalid weather API key")]
    InvalidApiKey,

    #[error("Weather service unavailable: {details}")]
    WeatherUnavailable { details: String },

    #[error("Weather forecast unavailable: {details}")]
    ForecastUnavailable { details: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingField(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: (*message).to_string(),
                    details: None,
                },
            ),
            AppError::MissingLocation => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Please provide either 'lat' and 'lon' coordinates or 'city' name"
                        .to_string(),
                    details: None,
                },
            ),
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: message.clone(),
                    details: None,
                },
            ),
            AppError::CityNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "City not found. Please check the city name.".to_string(),
                    details: None,
                },
            ),
            AppError::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    error: "Invalid API key. Please check your weather API key.".to_string(),
                    details: None,
                },
            ),
            AppError::WeatherUnavailable { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Weather service unavailable".to_string(),
                    details: Some(details.clone()),
                },
            ),
            AppError::ForecastUnavailable { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Weather forecast unavailable".to_string(),
                    details: Some(details.clone()),
                },
            ),
            AppError::Configuration(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: message.clone(),
                    details: None,
                },
            ),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Server error".to_string(),
                    details: Some(message.clone()),
                },
            ),
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Server error".to_string(),
                    details: Some(err.to_string()),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
