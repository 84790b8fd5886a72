//! Heuristic advisory engine
//!
//! Rule-based decisions over raw weather and soil readings. Everything in
//! this module is a pure function of its inputs so the same engine can run
//! on the server and in the browser, and so every rule is unit-testable.

use crate::models::{IrrigationAssessment, IrrigationDecision, IrrigationQuery};

/// Crops that need irrigation well before the generic moisture thresholds
pub const WATER_INTENSIVE_CROPS: &[&str] = &["Rice", "Sugarcane", "Cotton"];

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Decide whether irrigation is needed.
///
/// Rules are evaluated in order, first match wins. A water-intensive crop
/// with soil moisture below 60% overrides the base decision and raises
/// confidence by 0.10, capped at 0.95.
pub fn assess_irrigation(query: &IrrigationQuery) -> IrrigationDecision {
    let (mut irrigation_needed, mut confidence): (bool, f64) = if query.soil_moisture < 30.0 {
        (true, 0.85)
    } else if query.soil_moisture < 50.0 && query.temperature > 30.0 {
        (true, 0.75)
    } else if query.rainfall < 5.0 && query.humidity < 40.0 {
        (true, 0.70)
    } else if query.soil_moisture > 70.0 {
        (false, 0.80)
    } else {
        (false, 0.65)
    };

    if WATER_INTENSIVE_CROPS.contains(&query.crop_type.as_str()) && query.soil_moisture < 60.0 {
        irrigation_needed = true;
        confidence = (confidence + 0.10).min(0.95);
    }

    IrrigationDecision {
        irrigation_needed,
        confidence: round2(confidence),
    }
}

/// Build the advisory strings that accompany an irrigation decision.
pub fn irrigation_recommendations(
    query: &IrrigationQuery,
    decision: &IrrigationDecision,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if decision.irrigation_needed {
        recommendations.push("🌊 Irrigation is recommended for your crops".to_string());

        if query.soil_moisture < 30.0 {
            recommendations
                .push("💧 Soil moisture is critically low - immediate irrigation needed".to_string());
        } else if query.soil_moisture < 50.0 {
            recommendations.push("⚠️ Soil moisture is below optimal levels".to_string());
        }

        if query.temperature > 35.0 {
            recommendations.push(
                "🌡️ High temperature increases water demand - consider more frequent irrigation"
                    .to_string(),
            );
        }

        if query.humidity < 40.0 {
            recommendations.push(
                "💨 Low humidity increases evaporation - water early morning or evening"
                    .to_string(),
            );
        }

        if query.rainfall < 10.0 {
            recommendations
                .push("🌧️ Limited rainfall - rely on irrigation for water supply".to_string());
        }

        match query.crop_type.as_str() {
            "Rice" => recommendations.push(
                "🌾 Rice requires consistent water - maintain 2-3 inches of standing water"
                    .to_string(),
            ),
            "Wheat" => recommendations.push(
                "🌾 Wheat needs moderate irrigation - avoid overwatering during grain filling"
                    .to_string(),
            ),
            "Tomato" => recommendations.push(
                "🍅 Tomatoes prefer deep, infrequent watering - avoid wetting leaves".to_string(),
            ),
            "Cotton" => recommendations.push(
                "🌿 Cotton needs careful water management - avoid water stress during flowering"
                    .to_string(),
            ),
            _ => {}
        }

        recommendations.push(
            "⏰ Best irrigation time: Early morning (6-8 AM) or evening (6-8 PM)".to_string(),
        );
        recommendations
            .push("💧 Water deeply and slowly to encourage deep root growth".to_string());
    } else {
        recommendations.push("✅ No irrigation needed at this time".to_string());

        if query.soil_moisture > 70.0 {
            recommendations.push("💧 Soil moisture is adequate - avoid overwatering".to_string());
        }

        if query.rainfall > 20.0 {
            recommendations.push("🌧️ Recent rainfall provides sufficient moisture".to_string());
        }

        recommendations
            .push("👀 Monitor soil moisture regularly - check again in 2-3 days".to_string());
        recommendations.push(
            "🌱 Focus on other crop management practices like pest control and fertilization"
                .to_string(),
        );
    }

    // General monitoring advice, always appended
    recommendations.push("📊 Check soil moisture 2-3 times per week".to_string());
    recommendations.push("🌡️ Monitor weather forecasts for rain predictions".to_string());
    recommendations.push("📈 Keep records of irrigation schedules and crop response".to_string());

    recommendations
}

/// Decision and recommendations in one call.
pub fn advise_irrigation(query: &IrrigationQuery) -> IrrigationAssessment {
    let decision = assess_irrigation(query);
    let recommendations = irrigation_recommendations(query, &decision);
    IrrigationAssessment {
        irrigation_needed: decision.irrigation_needed,
        confidence: decision.confidence,
        recommendations,
    }
}

/// Weather-based agricultural advice.
///
/// Unlike the irrigation rules, these are independent checks: every rule
/// that matches contributes one string. A single "favorable" string is
/// returned when nothing fires.
pub fn agricultural_advice(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    condition: &str,
) -> Vec<String> {
    let mut advice = Vec::new();

    if temperature < 5.0 {
        advice.push(
            "⚠️ Very cold weather - protect sensitive crops with covers or move indoors"
                .to_string(),
        );
    } else if temperature < 15.0 {
        advice.push("🌡️ Cool weather - good for root vegetables and leafy greens".to_string());
    } else if temperature > 35.0 {
        advice.push(
            "🔥 Hot weather - increase watering frequency and provide shade for sensitive plants"
                .to_string(),
        );
    } else if temperature > 25.0 {
        advice.push("☀️ Warm weather - ideal for most summer crops".to_string());
    }

    if humidity > 80.0 {
        advice.push(
            "💧 High humidity - watch for fungal diseases, ensure good air circulation"
                .to_string(),
        );
    } else if humidity < 30.0 {
        advice.push(
            "🏜️ Low humidity - increase watering and consider mulching to retain moisture"
                .to_string(),
        );
    }

    if wind_speed > 10.0 {
        advice.push("💨 Strong winds - secure plants and consider windbreaks".to_string());
    }

    match condition {
        "Rain" => advice.push(
            "🌧️ Rainy weather - reduce watering, check drainage, watch for waterlogging"
                .to_string(),
        ),
        "Clear" => {
            advice.push("☀️ Clear skies - good for photosynthesis, monitor soil moisture".to_string())
        }
        "Clouds" => advice.push(
            "☁️ Cloudy weather - plants may need less water, good for transplanting".to_string(),
        ),
        _ => {}
    }

    if advice.is_empty() {
        advice.push(
            "🌱 Weather conditions are generally favorable for farming activities".to_string(),
        );
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn query(crop: &str, moisture: f64, temp: f64, humidity: f64, rainfall: f64) -> IrrigationQuery {
        IrrigationQuery {
            crop_type: crop.to_string(),
            soil_moisture: moisture,
            temperature: temp,
            humidity,
            rainfall,
        }
    }

    #[test]
    fn test_wheat_low_moisture_hits_first_rule() {
        let decision = assess_irrigation(&query("Wheat", 25.0, 28.0, 50.0, 20.0));
        assert!(decision.irrigation_needed);
        assert_eq!(decision.confidence, 0.85);
    }

    #[test]
    fn test_rice_override_forces_irrigation() {
        // Base rules fall through to the default (no irrigation, 0.65),
        // then the water-intensive override flips the decision.
        let decision = assess_irrigation(&query("Rice", 55.0, 20.0, 60.0, 30.0));
        assert!(decision.irrigation_needed);
        assert_eq!(decision.confidence, 0.75);
    }

    #[test]
    fn test_moderate_moisture_hot_day() {
        let decision = assess_irrigation(&query("Maize", 45.0, 32.0, 55.0, 15.0));
        assert!(decision.irrigation_needed);
        assert_eq!(decision.confidence, 0.75);
    }

    #[test]
    fn test_dry_air_low_rain() {
        let decision = assess_irrigation(&query("Maize", 60.0, 25.0, 35.0, 2.0));
        assert!(decision.irrigation_needed);
        assert_eq!(decision.confidence, 0.70);
    }

    #[test]
    fn test_saturated_soil_no_irrigation() {
        let decision = assess_irrigation(&query("Wheat", 80.0, 25.0, 60.0, 30.0));
        assert!(!decision.irrigation_needed);
        assert_eq!(decision.confidence, 0.80);
    }

    #[test]
    fn test_override_caps_confidence() {
        // Rule 1 gives 0.85; the Cotton override adds 0.10 for 0.95, not more.
        let decision = assess_irrigation(&query("Cotton", 20.0, 30.0, 50.0, 20.0));
        assert!(decision.irrigation_needed);
        assert_eq!(decision.confidence, 0.95);
    }

    #[test]
    fn test_override_not_applied_above_60_moisture() {
        let decision = assess_irrigation(&query("Rice", 65.0, 20.0, 60.0, 30.0));
        assert!(!decision.irrigation_needed);
        assert_eq!(decision.confidence, 0.65);
    }

    #[test]
    fn test_recommendations_when_irrigating() {
        let q = query("Rice", 25.0, 38.0, 30.0, 5.0);
        let decision = assess_irrigation(&q);
        let recs = irrigation_recommendations(&q, &decision);

        assert!(recs.iter().any(|r| r.contains("critically low")));
        assert!(recs.iter().any(|r| r.contains("High temperature")));
        assert!(recs.iter().any(|r| r.contains("Low humidity")));
        assert!(recs.iter().any(|r| r.contains("Limited rainfall")));
        assert!(recs.iter().any(|r| r.contains("standing water")));
        // General monitoring advice always present
        assert!(recs.iter().any(|r| r.contains("2-3 times per week")));
    }

    #[test]
    fn test_recommendations_when_not_irrigating() {
        let q = query("Wheat", 80.0, 22.0, 60.0, 30.0);
        let decision = assess_irrigation(&q);
        let recs = irrigation_recommendations(&q, &decision);

        assert!(recs.iter().any(|r| r.contains("No irrigation needed")));
        assert!(recs.iter().any(|r| r.contains("avoid overwatering")));
        assert!(recs.iter().any(|r| r.contains("sufficient moisture")));
        assert!(recs.iter().any(|r| r.contains("2-3 times per week")));
    }

    #[test]
    fn test_weather_advice_all_rules_fire() {
        let advice = agricultural_advice(40.0, 85.0, 15.0, "Rain");
        assert_eq!(advice.len(), 4);
        assert!(advice.iter().any(|a| a.contains("Hot weather")));
        assert!(advice.iter().any(|a| a.contains("High humidity")));
        assert!(advice.iter().any(|a| a.contains("Strong winds")));
        assert!(advice.iter().any(|a| a.contains("Rainy weather")));
    }

    #[test]
    fn test_weather_advice_default() {
        let advice = agricultural_advice(20.0, 50.0, 5.0, "Mist");
        assert_eq!(advice.len(), 1);
        assert!(advice[0].contains("generally favorable"));
    }

    #[test]
    fn test_weather_advice_temperature_bands() {
        assert!(agricultural_advice(2.0, 50.0, 5.0, "Mist")[0].contains("Very cold"));
        assert!(agricultural_advice(10.0, 50.0, 5.0, "Mist")[0].contains("Cool weather"));
        assert!(agricultural_advice(28.0, 50.0, 5.0, "Mist")[0].contains("Warm weather"));
    }

    proptest! {
        #[test]
        fn prop_decision_is_deterministic(
            moisture in 0.0f64..=100.0,
            temp in -10.0f64..=50.0,
            humidity in 0.0f64..=100.0,
            rainfall in 0.0f64..=500.0,
        ) {
            let q = query("Rice", moisture, temp, humidity, rainfall);
            prop_assert_eq!(assess_irrigation(&q), assess_irrigation(&q));
        }

        #[test]
        fn prop_confidence_bounded_and_rounded(
            crop in prop::sample::select(vec!["Rice", "Wheat", "Cotton", "Sugarcane", "Maize"]),
            moisture in 0.0f64..=100.0,
            temp in -10.0f64..=50.0,
            humidity in 0.0f64..=100.0,
            rainfall in 0.0f64..=500.0,
        ) {
            let decision = assess_irrigation(&query(crop, moisture, temp, humidity, rainfall));
            prop_assert!(decision.confidence >= 0.0);
            prop_assert!(decision.confidence <= 0.95);
            let scaled = decision.confidence * 100.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-9);
        }

        #[test]
        fn prop_low_moisture_always_irrigates(
            crop in prop::sample::select(vec!["Rice", "Wheat", "Cotton", "Sugarcane", "Maize"]),
            moisture in 0.0f64..30.0,
            temp in -10.0f64..=50.0,
            humidity in 0.0f64..=100.0,
            rainfall in 0.0f64..=500.0,
        ) {
            let decision = assess_irrigation(&query(crop, moisture, temp, humidity, rainfall));
            prop_assert!(decision.irrigation_needed);
        }
    }
}
