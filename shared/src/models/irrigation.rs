//! Irrigation decision models

use serde::{Deserialize, Serialize};

/// Raw field readings submitted for an irrigation decision
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IrrigationQuery {
    pub crop_type: String,
    /// Soil moisture percentage [0, 100]
    pub soil_moisture: f64,
    /// Temperature in Celsius [-10, 50]
    pub temperature: f64,
    /// Relative humidity percentage [0, 100]
    pub humidity: f64,
    /// Recent rainfall in millimeters [0, 500]
    pub rainfall: f64,
}

/// Outcome of the irrigation decision rules, before recommendations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IrrigationDecision {
    pub irrigation_needed: bool,
    /// Always within [0, 0.95], rounded to two decimal places
    pub confidence: f64,
}

/// Full advisory result returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationAssessment {
    pub irrigation_needed: bool,
    pub confidence: f64,
    pub recommendations: Vec<String>,
}
