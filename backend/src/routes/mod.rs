//! Route definitions for the Krishi Vaani advisory server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/crops", get(handlers::list_crops))
        .nest("/weather", weather_routes())
        .nest("/disease-risk", disease_risk_routes())
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_weather))
        .route("/advice", get(handlers::get_weather_advice))
}

/// Disease risk routes
fn disease_risk_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_disease_risk))
        .route("/score", post(handlers::score_disease_risk))
}
