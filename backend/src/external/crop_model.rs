//! Crop prediction model client
//!
//! Best-effort client for the external ML prediction service. Every call
//! is bounded by a timeout and any failure is reported as `None`: a
//! missing prediction must never abort the advisory request that asked
//! for it.

use reqwest::Client;
use serde::Deserialize;
use shared::CropFeatures;
use std::time::Duration;

use crate::config::MlConfig;

/// Client for the external crop prediction service
#[derive(Clone)]
pub struct CropModelClient {
    client: Client,
    base_url: String,
}

/// Prediction payload returned by the ML service
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct CropPrediction {
    pub prediction: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl CropPrediction {
    /// Extract the predicted crop names, when the model returned a list
    pub fn crop_names(&self) -> Option<Vec<String>> {
        let values = match &self.prediction {
            serde_json::Value::Array(values) => values,
            serde_json::Value::Object(map) => map.get("prediction")?.as_array()?,
            _ => return None,
        };

        let names: Vec<String> = values
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();

        if names.is_empty() {
            None
        } else {
            Some(names)
        }
    }
}

impl CropModelClient {
    /// Create a new client from configuration
    pub fn new(config: &MlConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Request a crop prediction. Returns `None` on any failure.
    pub async fn predict_crop(&self, features: &CropFeatures) -> Option<CropPrediction> {
        let url = format!("{}/api/crop-prediction", self.base_url);

        let response = match self.client.post(&url).json(features).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("ML prediction request failed: {}", err);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("ML prediction service returned {}", response.status());
            return None;
        }

        match response.json::<CropPrediction>().await {
            Ok(prediction) => Some(prediction),
            Err(err) => {
                tracing::warn!("Failed to parse ML prediction response: {}", err);
                None
            }
        }
    }
}
