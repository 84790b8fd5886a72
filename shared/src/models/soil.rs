//! Soil and climate models for crop advisory requests

use serde::{Deserialize, Serialize};

/// Soil readings submitted by the farmer; every field is optional and
/// replaced by a documented default when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoilReadings {
    pub soil_ph: Option<f64>,
    /// Nitrogen concentration in mg/kg
    pub nitrogen: Option<f64>,
    /// Phosphorus concentration in mg/kg
    pub phosphorus: Option<f64>,
    /// Potassium concentration in mg/kg
    pub potassium: Option<f64>,
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Relative humidity percentage
    pub humidity: Option<f64>,
    /// Annual rainfall in millimeters
    pub rainfall: Option<f64>,
    /// Farm area in hectares
    pub area: Option<f64>,
}

/// Fully-resolved feature set sent to the crop prediction model and
/// echoed back in the advisory response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropFeatures {
    pub soil_ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub rainfall: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub region: String,
    pub crop_type: String,
    pub area: f64,
}

impl CropFeatures {
    /// Resolve optional readings into concrete features using the
    /// documented defaults.
    pub fn from_readings(
        readings: &SoilReadings,
        location: Option<&str>,
        crop_type: Option<&str>,
    ) -> Self {
        Self {
            soil_ph: readings.soil_ph.unwrap_or(6.5),
            nitrogen: readings.nitrogen.unwrap_or(50.0),
            phosphorus: readings.phosphorus.unwrap_or(30.0),
            potassium: readings.potassium.unwrap_or(40.0),
            rainfall: readings.rainfall.unwrap_or(1000.0),
            temperature: readings.temperature.unwrap_or(25.0),
            humidity: readings.humidity.unwrap_or(60.0),
            region: location.unwrap_or("tropical").to_string(),
            crop_type: crop_type.unwrap_or("rice").to_string(),
            area: readings.area.unwrap_or(1.0),
        }
    }
}
