//! Validation utilities for weather snapshots

use rust_decimal::Decimal;

use crate::models::{WeatherSnapshot, FORECAST_DAYS};
use crate::types::GpsCoordinates;

// ============================================================================
// Weather Snapshot Validations
// ============================================================================

/// Validate a percentage lies within [0, 100]
pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate coordinates are on the globe
pub fn validate_coordinates(coordinates: &GpsCoordinates) -> Result<(), &'static str> {
    if coordinates.latitude < Decimal::from(-90) || coordinates.latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if coordinates.longitude < Decimal::from(-180) || coordinates.longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate the structural invariants of a snapshot
///
/// Checks the forecast length and date sequence, every percentage field,
/// and that alert windows start no earlier than the snapshot and never end
/// before they start.
pub fn validate_snapshot(snapshot: &WeatherSnapshot) -> Result<(), &'static str> {
    validate_coordinates(&snapshot.location.coordinates)?;

    if snapshot.forecast.len() != FORECAST_DAYS {
        return Err("Forecast must contain exactly 7 days");
    }
    for pair in snapshot.forecast.windows(2) {
        if pair[0].date.succ_opt() != Some(pair[1].date) {
            return Err("Forecast dates must be consecutive days");
        }
    }

    validate_percentage(snapshot.current.humidity).map_err(|_| "Humidity must be between 0 and 100")?;
    validate_percentage(snapshot.agricultural_metrics.soil_moisture)
        .map_err(|_| "Soil moisture must be between 0 and 100")?;
    for day in &snapshot.forecast {
        validate_percentage(day.humidity).map_err(|_| "Humidity must be between 0 and 100")?;
        validate_percentage(day.rain_chance).map_err(|_| "Rain chance must be between 0 and 100")?;
    }

    for alert in &snapshot.alerts {
        if alert.end_time < alert.start_time {
            return Err("Alert cannot end before it starts");
        }
        if alert.start_time < snapshot.location.localtime {
            return Err("Alert cannot start before the snapshot was generated");
        }
    }

    Ok(())
}
