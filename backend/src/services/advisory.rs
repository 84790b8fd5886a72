//! Crop advisory service
//!
//! Combines the farmer's soil readings with a best-effort ML crop
//! prediction and AI-generated advice into a single advisory response.
//! The ML call may fail silently (a fixed default crop list is
//! substituted); the AI call falls back to its unavailable-reply string.

use chrono::Utc;
use serde::Serialize;
use shared::{ChatTurn, CropFeatures, SoilReadings};

use crate::error::AppResult;
use crate::external::crop_model::{CropModelClient, CropPrediction};
use crate::external::GenerativeAiClient;

/// Crops suggested when the ML service has no prediction to offer
pub const DEFAULT_CROPS: &[&str] = &["Rice", "Wheat", "Maize"];

/// Advisory service
#[derive(Clone)]
pub struct AdvisoryService {
    ai: GenerativeAiClient,
    crop_model: CropModelClient,
}

/// Crop advisory response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropAdvisory {
    pub location: String,
    pub soil_data: CropFeatures,
    pub ml_prediction: Option<CropPrediction>,
    pub ai_advice: String,
    pub recommendations: Recommendations,
    pub timestamp: String,
}

/// Structured recommendation summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub best_crops: Vec<String>,
    pub planting_season: String,
    pub soil_preparation: String,
    pub fertilizer: String,
    pub irrigation: String,
    pub pest_management: String,
}

impl AdvisoryService {
    pub fn new(ai: GenerativeAiClient, crop_model: CropModelClient) -> Self {
        Self { ai, crop_model }
    }

    /// Build a full crop advisory for the given readings.
    pub async fn advise(
        &self,
        readings: &SoilReadings,
        location: Option<&str>,
        crop_type: Option<&str>,
    ) -> AppResult<CropAdvisory> {
        let features = CropFeatures::from_readings(readings, location, crop_type);

        // Best-effort: a missing prediction never aborts the advisory
        let ml_prediction = self.crop_model.predict_crop(&features).await;

        let prompt = build_advisory_prompt(&features);
        let ai_advice = self.ai.generate(&[ChatTurn::user(prompt)]).await;

        let best_crops = ml_prediction
            .as_ref()
            .and_then(CropPrediction::crop_names)
            .unwrap_or_else(|| DEFAULT_CROPS.iter().map(|c| c.to_string()).collect());

        Ok(CropAdvisory {
            location: location.unwrap_or("Unknown").to_string(),
            soil_data: features,
            ml_prediction,
            ai_advice,
            recommendations: Recommendations {
                best_crops,
                planting_season: "Based on your region and soil conditions".to_string(),
                soil_preparation: "Test soil pH and add necessary amendments".to_string(),
                fertilizer: "Use balanced NPK fertilizer based on soil test".to_string(),
                irrigation: "Maintain consistent moisture levels".to_string(),
                pest_management: "Monitor regularly and use integrated pest management"
                    .to_string(),
            },
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

/// Build the numbered advisory prompt sent to the generative model
pub fn build_advisory_prompt(features: &CropFeatures) -> String {
    format!(
        "Based on the following agricultural data, provide crop advisory recommendations:\n\
         - Soil pH: {}\n\
         - Nitrogen (N): {} mg/kg\n\
         - Phosphorus (P): {} mg/kg\n\
         - Potassium (K): {} mg/kg\n\
         - Temperature: {}°C\n\
         - Humidity: {}%\n\
         - Rainfall: {}mm\n\
         - Region: {}\n\
         - Crop Type: {}\n\
         \n\
         Please provide specific recommendations for:\n\
         1. Best crops to grow based on NPK levels\n\
         2. Planting season\n\
         3. Soil preparation and NPK optimization\n\
         4. Fertilizer requirements based on current NPK\n\
         5. Irrigation needs\n\
         6. Pest management\n\
         7. Expected yield",
        features.soil_ph,
        features.nitrogen,
        features.phosphorus,
        features.potassium,
        features.temperature,
        features.humidity,
        features.rainfall,
        features.region,
        features.crop_type,
    )
}
