//! HTTP handlers for crop disease risk endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{AdvisoryReport, WeatherSnapshot};
use crate::services::DiseaseRiskService;
use crate::AppState;

/// List the crops with disease data
pub async fn list_crops() -> Json<Vec<&'static str>> {
    Json(shared::supported_crops().to_vec())
}

/// Query parameters for a disease risk report
#[derive(Debug, Deserialize, Validate)]
pub struct DiseaseRiskQuery {
    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,
    #[validate(length(min = 1, max = 64, message = "Crop must be 1 to 64 characters"))]
    pub crop: String,
}

/// Disease risk report for a crop at a location
pub async fn get_disease_risk(
    State(state): State<AppState>,
    Query(query): Query<DiseaseRiskQuery>,
) -> AppResult<Json<AdvisoryReport>> {
    query.validate()?;
    let location = state.weather.resolve_location(query.location.as_deref());
    let service = DiseaseRiskService::new(state.weather.clone());
    let report = service.assess(&location, &query.crop).await?;
    Ok(Json(report))
}

/// Request body for scoring a caller-supplied snapshot
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub snapshot: WeatherSnapshot,
    #[validate(length(min = 1, max = 64, message = "Crop must be 1 to 64 characters"))]
    pub crop: String,
}

/// Disease risk report for a crop under the supplied snapshot
pub async fn score_disease_risk(
    State(state): State<AppState>,
    Json(input): Json<ScoreRequest>,
) -> AppResult<Json<AdvisoryReport>> {
    input.validate()?;
    let service = DiseaseRiskService::new(state.weather.clone());
    let report = service.assess_snapshot(&input.snapshot, &input.crop)?;
    Ok(Json(report))
}
