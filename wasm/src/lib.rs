//! WebAssembly module for the Krishi Vaani advisory platform
//!
//! Runs the advisory core in the browser:
//! - Weather synthesis (random or seeded)
//! - Crop disease risk scoring
//! - Preventive recommendations and farming advice
//!
//! Structured values cross the boundary as JSON strings in the same camelCase
//! shape the HTTP API returns.

use chrono::{DateTime, TimeZone, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("krishi advisory core loaded"));
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn parse_snapshot(snapshot_json: &str) -> Result<WeatherSnapshot, String> {
    serde_json::from_str(snapshot_json).map_err(|e| format!("Invalid snapshot JSON: {}", e))
}

fn timestamp(now_ms: f64) -> Result<DateTime<Utc>, String> {
    Utc.timestamp_millis_opt(now_ms as i64)
        .single()
        .ok_or_else(|| format!("Invalid timestamp: {}", now_ms))
}

fn seeded_weather_json(location: &str, seed: u64, now_ms: f64) -> Result<String, String> {
    let now = timestamp(now_ms)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    to_json(&shared::synthesize_weather_with(location, now, &mut rng))
}

fn disease_risk_json(snapshot_json: &str, crop: &str) -> Result<String, String> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let risk = shared::score_disease_risk(&snapshot, crop).map_err(|e| e.to_string())?;
    to_json(&risk)
}

fn recommendations_json(risk_json: &str) -> Result<String, String> {
    let risk: CropDiseaseRisk =
        serde_json::from_str(risk_json).map_err(|e| format!("Invalid risk JSON: {}", e))?;
    to_json(&shared::recommend_actions(&risk))
}

fn advice_json(snapshot_json: &str, crop: Option<&str>) -> Result<String, String> {
    let snapshot = parse_snapshot(snapshot_json)?;
    to_json(&shared::agricultural_advice(&snapshot, crop))
}

/// Synthesize a weather snapshot for a free-text location
#[wasm_bindgen]
pub fn synthesize_weather(location: &str) -> Result<String, JsValue> {
    to_json(&shared::synthesize_weather(location)).map_err(|e| JsValue::from_str(&e))
}

/// Synthesize a reproducible snapshot from a seed and a Unix time in milliseconds
#[wasm_bindgen]
pub fn synthesize_weather_seeded(location: &str, seed: u64, now_ms: f64) -> Result<String, JsValue> {
    seeded_weather_json(location, seed, now_ms).map_err(|e| JsValue::from_str(&e))
}

/// Score a crop against a snapshot; rejects crops without disease data
#[wasm_bindgen]
pub fn score_disease_risk(snapshot_json: &str, crop: &str) -> Result<String, JsValue> {
    disease_risk_json(snapshot_json, crop).map_err(|e| JsValue::from_str(&e))
}

/// Recommendations for a risk report produced by `score_disease_risk`
#[wasm_bindgen]
pub fn recommend_actions(risk_json: &str) -> Result<String, JsValue> {
    recommendations_json(risk_json).map_err(|e| JsValue::from_str(&e))
}

/// Farming advice for a snapshot and optional crop
#[wasm_bindgen]
pub fn agricultural_advice(snapshot_json: &str, crop: Option<String>) -> Result<String, JsValue> {
    advice_json(snapshot_json, crop.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Risk band for a 0-100 score
#[wasm_bindgen]
pub fn classify_risk_score(score: f64) -> String {
    shared::classify_risk(score).to_string()
}

/// Irrigation guidance for a soil moisture percentage
#[wasm_bindgen]
pub fn soil_moisture_guidance(percent: f64) -> String {
    shared::soil_moisture_status(percent).description().to_string()
}

/// Whether disease data exists for `crop`
#[wasm_bindgen]
pub fn is_supported_crop(crop: &str) -> bool {
    shared::is_supported_crop(crop)
}

/// Crops with disease data, in display order
#[wasm_bindgen]
pub fn supported_crops() -> js_sys::Array {
    shared::supported_crops()
        .iter()
        .map(|crop| JsValue::from_str(crop))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_MS: f64 = 1_717_200_000_000.0;

    #[test]
    fn test_classify_risk_score() {
        assert_eq!(classify_risk_score(80.0), "severe");
        assert_eq!(classify_risk_score(50.0), "high");
        assert_eq!(classify_risk_score(25.0), "moderate");
        assert_eq!(classify_risk_score(10.0), "low");
    }

    #[test]
    fn test_seeded_weather_is_reproducible() {
        let first = seeded_weather_json("Kochi, Kerala", 42, NOW_MS).unwrap();
        let second = seeded_weather_json("Kochi, Kerala", 42, NOW_MS).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("\"agriculturalMetrics\""));
    }

    #[test]
    fn test_pipeline_through_json() {
        let snapshot = seeded_weather_json("Ludhiana, Punjab", 7, NOW_MS).unwrap();
        let risk = disease_risk_json(&snapshot, "Wheat").unwrap();
        let recommendations = recommendations_json(&risk).unwrap();
        let parsed: Vec<Recommendation> = serde_json::from_str(&recommendations).unwrap();
        assert!(!parsed.is_empty());

        let advice: Vec<String> =
            serde_json::from_str(&advice_json(&snapshot, Some("wheat")).unwrap()).unwrap();
        assert!(!advice.is_empty());
    }

    #[test]
    fn test_unsupported_crop_message() {
        let snapshot = seeded_weather_json("Pune", 1, NOW_MS).unwrap();
        assert_eq!(
            disease_risk_json(&snapshot, "banana"),
            Err("No disease data available for banana".to_string())
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(disease_risk_json("{}", "rice").unwrap_err().starts_with("Invalid snapshot JSON"));
        assert!(recommendations_json("[]").unwrap_err().starts_with("Invalid risk JSON"));
        assert!(seeded_weather_json("Pune", 1, f64::MAX).is_err());
    }

    #[test]
    fn test_soil_moisture_guidance() {
        assert_eq!(soil_moisture_guidance(20.0), "Low - Irrigation recommended");
        assert_eq!(soil_moisture_guidance(50.0), "Optimal for most crops");
    }
}
