//! WebAssembly module for the Farm Advisory Platform
//!
//! Provides client-side computation for:
//! - Irrigation predictions when the server is unreachable
//! - Input validation before submission
//! - Weather-based agricultural advice
//!
//! The browser fallback runs the same heuristic engine as the server
//! endpoint, so offline answers match online ones.

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::advisory::*;
pub use shared::models::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Run the irrigation heuristic on a JSON-encoded query
///
/// Returns a JSON object with `irrigation_needed`, `confidence` and
/// `recommendations`, matching the server endpoint's payload.
#[wasm_bindgen]
pub fn predict_irrigation(query_json: &str) -> Result<String, JsValue> {
    let query: IrrigationQuery = serde_json::from_str(query_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid query JSON: {}", e)))?;

    validate_irrigation_query(&query).map_err(JsValue::from_str)?;

    let assessment = advise_irrigation(&query);
    serde_json::to_string(&assessment)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Validate an irrigation query without running the heuristic
///
/// Returns an empty string when valid, or the validation message.
#[wasm_bindgen]
pub fn check_irrigation_query(query_json: &str) -> String {
    let query: IrrigationQuery = match serde_json::from_str(query_json) {
        Ok(query) => query,
        Err(e) => return format!("Invalid query JSON: {}", e),
    };

    match validate_irrigation_query(&query) {
        Ok(()) => String::new(),
        Err(msg) => msg.to_string(),
    }
}

/// Whether the crop is one of the water-intensive varieties
#[wasm_bindgen]
pub fn is_water_intensive_crop(crop_type: &str) -> bool {
    WATER_INTENSIVE_CROPS
        .iter()
        .any(|crop| crop.eq_ignore_ascii_case(crop_type))
}

/// Derive agricultural advice from current weather conditions
///
/// Returns the advice strings as a JSON array.
#[wasm_bindgen]
pub fn weather_advice(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    condition: &str,
) -> Result<String, JsValue> {
    let advice = agricultural_advice(temperature, humidity, wind_speed, condition);
    serde_json::to_string(&advice)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Validate soil readings for the crop advisory form
///
/// Returns an empty string when valid, or the validation message.
#[wasm_bindgen]
pub fn check_soil_readings(readings_json: &str) -> String {
    let readings: SoilReadings = match serde_json::from_str(readings_json) {
        Ok(readings) => readings,
        Err(e) => return format!("Invalid readings JSON: {}", e),
    };

    match validate_soil_readings(&readings) {
        Ok(()) => String::new(),
        Err(msg) => msg.to_string(),
    }
}
