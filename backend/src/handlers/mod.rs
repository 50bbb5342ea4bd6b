//! HTTP handlers for the Krishi Vaani advisory server

pub mod disease_risk;
pub mod health;
pub mod weather;

pub use disease_risk::{get_disease_risk, list_crops, score_disease_risk};
pub use health::health_check;
pub use weather::{get_weather, get_weather_advice};
