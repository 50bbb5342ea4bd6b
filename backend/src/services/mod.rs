//! Business logic services for the Krishi Vaani advisory server

pub mod disease_risk;
pub mod weather;

pub use disease_risk::DiseaseRiskService;
pub use weather::WeatherService;
