//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{AdviceResponse, WeatherSnapshot};
use crate::AppState;

/// Query parameters for weather by location
#[derive(Debug, Deserialize, Validate)]
pub struct WeatherQuery {
    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,
}

/// Get the weather snapshot for a location
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherSnapshot>> {
    query.validate()?;
    let location = state.weather.resolve_location(query.location.as_deref());
    Ok(Json(state.weather.get_weather(&location).await))
}

/// Query parameters for farming advice
#[derive(Debug, Deserialize, Validate)]
pub struct AdviceQuery {
    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,
    #[validate(length(min = 1, max = 64, message = "Crop must be 1 to 64 characters"))]
    pub crop: Option<String>,
}

/// Get weather-based farming advice for a location and optional crop
pub async fn get_weather_advice(
    State(state): State<AppState>,
    Query(query): Query<AdviceQuery>,
) -> AppResult<Json<AdviceResponse>> {
    query.validate()?;
    let location = state.weather.resolve_location(query.location.as_deref());
    let snapshot = state.weather.get_weather(&location).await;

    let soil_moisture = snapshot.agricultural_metrics.soil_moisture;
    let status = shared::soil_moisture_status(soil_moisture);

    Ok(Json(AdviceResponse {
        advice: shared::agricultural_advice(&snapshot, query.crop.as_deref()),
        location: snapshot.location,
        crop: query.crop,
        soil_moisture,
        soil_moisture_status: status,
        soil_moisture_description: status.description().to_string(),
    }))
}
