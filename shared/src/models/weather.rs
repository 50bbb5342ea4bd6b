//! Weather data models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CompassDirection, GpsCoordinates};

/// Number of daily entries in every forecast, index 0 being today
pub const FORECAST_DAYS: usize = 7;

/// Number of leading forecast days treated as "recent rainfall"
pub const RECENT_RAINFALL_DAYS: usize = 3;

/// A weather snapshot for a location: current conditions, a 7-day
/// forecast, derived alerts and agricultural metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub location: LocationInfo,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
    pub alerts: Vec<WeatherAlert>,
    pub agricultural_metrics: AgriculturalMetrics,
}

impl WeatherSnapshot {
    /// Total rainfall (mm) over the first three forecast days
    pub fn recent_rainfall(&self) -> f64 {
        self.forecast
            .iter()
            .take(RECENT_RAINFALL_DAYS)
            .map(|day| day.rainfall)
            .sum()
    }
}

/// Where the snapshot applies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    pub name: String,
    pub region: String,
    pub country: String,
    pub coordinates: GpsCoordinates,
    pub localtime: DateTime<Utc>,
}

/// Current observed conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Air temperature (°C)
    pub temp: f64,
    pub feels_like: f64,
    pub condition: String,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Wind speed (km/h)
    pub wind_speed: f64,
    pub wind_direction: CompassDirection,
    /// Pressure (hPa)
    pub pressure: f64,
    /// Current precipitation (mm)
    pub precipitation: f64,
    pub uv: f64,
    /// Visibility (km)
    pub visibility: f64,
    pub is_day: bool,
    pub icon: String,
}

/// Daily weather forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition: String,
    pub humidity: f64,
    pub wind_speed: f64,
    /// Probability of rain (%)
    pub rain_chance: f64,
    /// Expected rainfall (mm)
    pub rainfall: f64,
    pub icon: String,
}

/// Weather alert derived from a snapshot's own values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAlert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Alert severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

/// Metrics derived for field work
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgriculturalMetrics {
    /// Soil moisture (%)
    pub soil_moisture: f64,
    /// Evapotranspiration (mm/day)
    pub evapotranspiration: f64,
    /// Accumulated heat units
    pub growing_degree_days: f64,
}
