//! HTTP handler for the crop advisory endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::{validate_soil_readings, SoilReadings};

use crate::error::{AppError, AppResult};
use crate::services::advisory::{AdvisoryService, CropAdvisory};
use crate::AppState;

/// Crop advisory request body
#[derive(Debug, Deserialize)]
pub struct CropAdvisoryRequest {
    #[serde(rename = "soilData")]
    pub soil_data: Option<SoilReadings>,
    pub location: Option<String>,
    #[serde(rename = "cropType")]
    pub crop_type: Option<String>,
}

/// Build a crop advisory from soil readings
pub async fn crop_advisory(
    State(state): State<AppState>,
    Json(request): Json<CropAdvisoryRequest>,
) -> AppResult<Json<CropAdvisory>> {
    let readings = request
        .soil_data
        .as_ref()
        .ok_or(AppError::MissingField("Soil data is required"))?;

    validate_soil_readings(readings).map_err(|msg| AppError::Validation(msg.to_string()))?;

    let service = AdvisoryService::new(state.ai.clone(), state.crop_model.clone());
    let advisory = service
        .advise(
            readings,
            request.location.as_deref(),
            request.crop_type.as_deref(),
        )
        .await?;

    Ok(Json(advisory))
}
