//! Krishi Vaani advisory server
//!
//! HTTP boundary around the shared advisory core: synthesized weather with a
//! per-location cache, crop disease risk reports and farming advice.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use services::WeatherService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
}

impl AppState {
    /// Build state from configuration, rejecting settings the server cannot run with
    pub fn new(config: Config) -> AppResult<Self> {
        let default_location = config.weather.default_location.trim();
        if default_location.is_empty() {
            return Err(AppError::Configuration(
                "weather.default_location must not be empty".to_string(),
            ));
        }
        if default_location.chars().count() > 200 {
            return Err(AppError::Configuration(
                "weather.default_location must be at most 200 characters".to_string(),
            ));
        }

        Ok(Self {
            weather: WeatherService::new(&config.weather),
            config: Arc::new(config),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Krishi Vaani Advisory API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
