//! HTTP handler for the irrigation prediction endpoint
//!
//! Served directly from the shared heuristic engine; the browser's
//! offline fallback runs the same engine through the WASM bindings.

use axum::Json;
use serde::{Deserialize, Serialize};
use shared::{advise_irrigation, validate_irrigation_query, IrrigationQuery};

use crate::error::{AppError, AppResult};

/// Irrigation prediction request body
#[derive(Debug, Deserialize)]
pub struct IrrigationRequest {
    pub crop_type: Option<String>,
    pub soil_moisture: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
}

/// Irrigation prediction response body
#[derive(Debug, Serialize)]
pub struct IrrigationResponse {
    pub success: bool,
    pub irrigation_needed: bool,
    pub confidence: f64,
    pub recommendations: Vec<String>,
}

fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(format!("Missing required field: {}", field)))
}

/// Decide whether irrigation is needed for the given readings
pub async fn predict_irrigation(
    Json(request): Json<IrrigationRequest>,
) -> AppResult<Json<IrrigationResponse>> {
    let query = IrrigationQuery {
        crop_type: required(request.crop_type, "crop_type")?,
        soil_moisture: required(request.soil_moisture, "soil_moisture")?,
        temperature: required(request.temperature, "temperature")?,
        humidity: required(request.humidity, "humidity")?,
        rainfall: required(request.rainfall, "rainfall")?,
    };

    validate_irrigation_query(&query).map_err(|msg| AppError::Validation(msg.to_string()))?;

    let assessment = advise_irrigation(&query);

    Ok(Json(IrrigationResponse {
        success: true,
        irrigation_needed: assessment.irrigation_needed,
        confidence: assessment.confidence,
        recommendations: assessment.recommendations,
    }))
}
