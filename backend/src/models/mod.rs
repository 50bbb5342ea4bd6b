//! API models for the Krishi Vaani advisory server
//!
//! Re-exports models from the shared crate and adds the report envelopes
//! returned by the HTTP API

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub use shared::models::*;
pub use shared::SoilMoistureStatus;

/// Headline weather figures the risk was computed from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub temperature: f64,
    pub humidity: f64,
    pub condition: String,
    /// Rainfall over the first three forecast days (mm)
    pub recent_rainfall: f64,
    pub soil_moisture: f64,
    pub alerts: Vec<WeatherAlert>,
}

impl From<&WeatherSnapshot> for WeatherSummary {
    fn from(snapshot: &WeatherSnapshot) -> Self {
        Self {
            temperature: snapshot.current.temp,
            humidity: snapshot.current.humidity,
            condition: snapshot.current.condition.clone(),
            recent_rainfall: snapshot.recent_rainfall(),
            soil_moisture: snapshot.agricultural_metrics.soil_moisture,
            alerts: snapshot.alerts.clone(),
        }
    }
}

/// Disease risk report for one location and crop
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub location: LocationInfo,
    pub weather: WeatherSummary,
    pub risk: CropDiseaseRisk,
    pub recommendations: Vec<Recommendation>,
}

/// Farming advice for one location
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub location: LocationInfo,
    pub crop: Option<String>,
    pub advice: Vec<String>,
    pub soil_moisture: f64,
    pub soil_moisture_status: SoilMoistureStatus,
    pub soil_moisture_description: String,
}
