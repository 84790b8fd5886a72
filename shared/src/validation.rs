//! Input validation for advisory requests
//!
//! Range checks shared by the server endpoints and the browser form
//! (via WASM), so both sides reject the same inputs.

use crate::models::{IrrigationQuery, SoilReadings};

/// Validate an irrigation query against the documented sensor ranges.
pub fn validate_irrigation_query(query: &IrrigationQuery) -> Result<(), &'static str> {
    if query.crop_type.trim().is_empty() {
        return Err("Crop type is required");
    }
    if !query.soil_moisture.is_finite() || !(0.0..=100.0).contains(&query.soil_moisture) {
        return Err("Soil moisture must be between 0 and 100 percent");
    }
    if !query.temperature.is_finite() || !(-10.0..=50.0).contains(&query.temperature) {
        return Err("Temperature must be between -10 and 50 degrees Celsius");
    }
    if !query.humidity.is_finite() || !(0.0..=100.0).contains(&query.humidity) {
        return Err("Humidity must be between 0 and 100 percent");
    }
    if !query.rainfall.is_finite() || !(0.0..=500.0).contains(&query.rainfall) {
        return Err("Rainfall must be between 0 and 500 millimeters");
    }
    Ok(())
}

/// Validate the optional soil readings that accompany a crop advisory
/// request. Absent fields are fine; present fields must be plausible.
pub fn validate_soil_readings(readings: &SoilReadings) -> Result<(), &'static str> {
    if let Some(ph) = readings.soil_ph {
        if !ph.is_finite() || !(0.0..=14.0).contains(&ph) {
            return Err("Soil pH must be between 0 and 14");
        }
    }
    for (value, message) in [
        (readings.nitrogen, "Nitrogen must be a non-negative number"),
        (readings.phosphorus, "Phosphorus must be a non-negative number"),
        (readings.potassium, "Potassium must be a non-negative number"),
        (readings.rainfall, "Rainfall must be a non-negative number"),
    ] {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(message);
            }
        }
    }
    if let Some(humidity) = readings.humidity {
        if !humidity.is_finite() || !(0.0..=100.0).contains(&humidity) {
            return Err("Humidity must be between 0 and 100 percent");
        }
    }
    if let Some(area) = readings.area {
        if !area.is_finite() || area <= 0.0 {
            return Err("Farm area must be a positive number");
        }
    }
    Ok(())
}
