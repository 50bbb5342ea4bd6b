//! Disease risk service: scores crops against synthesized or supplied weather

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{AdvisoryReport, WeatherSnapshot, WeatherSummary};
use crate::services::weather::WeatherService;

/// Disease risk service for building advisory reports
#[derive(Clone)]
pub struct DiseaseRiskService {
    weather: WeatherService,
}

impl DiseaseRiskService {
    /// Create a new DiseaseRiskService instance
    pub fn new(weather: WeatherService) -> Self {
        Self { weather }
    }

    /// Report for `crop` under the (possibly cached) weather at `location`
    pub async fn assess(&self, location: &str, crop: &str) -> AppResult<AdvisoryReport> {
        if !shared::is_supported_crop(crop) {
            return Err(AppError::UnsupportedCrop(crop.to_string()));
        }
        let snapshot = self.weather.get_weather(location).await;
        build_report(&snapshot, crop)
    }

    /// Report for `crop` under a caller-supplied snapshot
    pub fn assess_snapshot(&self, snapshot: &WeatherSnapshot, crop: &str) -> AppResult<AdvisoryReport> {
        shared::validate_snapshot(snapshot).map_err(|message| AppError::Validation {
            field: "snapshot".to_string(),
            message: message.to_string(),
            message_hi: "मौसम डेटा अमान्य है".to_string(),
        })?;
        build_report(snapshot, crop)
    }
}

fn build_report(snapshot: &WeatherSnapshot, crop: &str) -> AppResult<AdvisoryReport> {
    let risk = shared::score_disease_risk(snapshot, crop)?;
    let recommendations = shared::recommend_actions(&risk);

    tracing::info!(
        crop,
        location = %snapshot.location.name,
        overall_risk = %risk.overall_risk,
        overall_score = risk.overall_risk_score,
        "assessed disease risk"
    );

    Ok(AdvisoryReport {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        location: snapshot.location.clone(),
        weather: WeatherSummary::from(snapshot),
        risk,
        recommendations,
    })
}
