//! Weather-based farming advice

use serde::{Deserialize, Serialize};

use crate::models::WeatherSnapshot;

const HEAT_THRESHOLD: f64 = 35.0;
const COLD_THRESHOLD: f64 = 10.0;
const RAIN_CHANCE_THRESHOLD: f64 = 60.0;
const RAIN_LOOKAHEAD_DAYS: usize = 3;
const STRONG_WIND_THRESHOLD: f64 = 20.0;
const HIGH_HUMIDITY_THRESHOLD: f64 = 80.0;

const GENERAL_ADVICE: &str = "Weather conditions are favorable for general farming activities.";

/// Advice lines for the snapshot, with crop-specific notes when `crop` is known
pub fn agricultural_advice(snapshot: &WeatherSnapshot, crop: Option<&str>) -> Vec<String> {
    let current = &snapshot.current;
    let mut advice = Vec::new();

    if current.temp > HEAT_THRESHOLD {
        advice.push(
            "High temperatures detected. Increase irrigation frequency and consider shade for sensitive crops.",
        );
    } else if current.temp < COLD_THRESHOLD {
        advice.push(
            "Low temperatures detected. Protect sensitive crops with covers and avoid irrigation in the evening.",
        );
    }

    let rain_expected = snapshot
        .forecast
        .iter()
        .take(RAIN_LOOKAHEAD_DAYS)
        .any(|day| day.rain_chance > RAIN_CHANCE_THRESHOLD);
    if rain_expected {
        advice.push(
            "High chance of rain in the next 3 days. Consider delaying fertilizer application and pesticide spraying.",
        );
    }

    if current.wind_speed > STRONG_WIND_THRESHOLD {
        advice.push("Strong winds detected. Delay spraying operations and provide support for tall crops.");
    }

    if current.humidity > HIGH_HUMIDITY_THRESHOLD {
        advice.push(
            "High humidity detected. Monitor for fungal diseases and ensure good air circulation around plants.",
        );
    }

    if let Some(crop) = crop {
        match crop.to_lowercase().as_str() {
            "rice" if snapshot.agricultural_metrics.soil_moisture < 50.0 => {
                advice.push("Soil moisture levels are low for rice cultivation. Increase irrigation.");
            }
            "wheat" if snapshot.forecast.iter().any(|day| day.temp_max > 30.0) => {
                advice.push(
                    "High temperatures forecasted which may affect wheat grain filling. Ensure adequate irrigation.",
                );
            }
            "cotton" if current.humidity > 70.0 => {
                advice.push(
                    "High humidity may increase risk of bollworm in cotton. Monitor closely and consider preventive measures.",
                );
            }
            _ => {}
        }
    }

    if advice.is_empty() {
        advice.push(GENERAL_ADVICE);
    }

    advice.into_iter().map(String::from).collect()
}

/// Irrigation guidance band for a soil moisture percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SoilMoistureStatus {
    Low,
    Optimal,
    High,
}

impl SoilMoistureStatus {
    pub fn description(&self) -> &'static str {
        match self {
            SoilMoistureStatus::Low => "Low - Irrigation recommended",
            SoilMoistureStatus::Optimal => "Optimal for most crops",
            SoilMoistureStatus::High => "High - Reduce irrigation",
        }
    }
}

pub fn soil_moisture_status(percent: f64) -> SoilMoistureStatus {
    if percent < 30.0 {
        SoilMoistureStatus::Low
    } else if percent > 70.0 {
        SoilMoistureStatus::High
    } else {
        SoilMoistureStatus::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesizer::synthesize_weather_with;
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn calm_snapshot() -> WeatherSnapshot {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let mut snapshot = synthesize_weather_with("Nashik, India", now, &mut ChaCha8Rng::seed_from_u64(11));
        snapshot.current.temp = 25.0;
        snapshot.current.humidity = 60.0;
        snapshot.current.wind_speed = 10.0;
        snapshot.agricultural_metrics.soil_moisture = 60.0;
        for day in snapshot.forecast.iter_mut() {
            day.rain_chance = 10.0;
            day.temp_max = 29.0;
        }
        snapshot
    }

    #[test]
    fn test_calm_weather_general_advice() {
        assert_eq!(agricultural_advice(&calm_snapshot(), None), vec![GENERAL_ADVICE.to_string()]);
        assert_eq!(
            agricultural_advice(&calm_snapshot(), Some("rice")),
            vec![GENERAL_ADVICE.to_string()]
        );
    }

    #[test]
    fn test_weather_advice_order() {
        let mut snapshot = calm_snapshot();
        snapshot.current.temp = 38.0;
        snapshot.current.wind_speed = 22.0;
        snapshot.current.humidity = 85.0;
        snapshot.forecast[2].rain_chance = 61.0;

        let advice = agricultural_advice(&snapshot, None);
        assert_eq!(advice.len(), 4);
        assert!(advice[0].starts_with("High temperatures detected"));
        assert!(advice[1].starts_with("High chance of rain"));
        assert!(advice[2].starts_with("Strong winds detected"));
        assert!(advice[3].starts_with("High humidity detected"));
    }

    #[test]
    fn test_rain_outside_lookahead_ignored() {
        let mut snapshot = calm_snapshot();
        snapshot.forecast[3].rain_chance = 90.0;
        assert_eq!(agricultural_advice(&snapshot, None), vec![GENERAL_ADVICE.to_string()]);
    }

    #[test]
    fn test_cold_advice() {
        let mut snapshot = calm_snapshot();
        snapshot.current.temp = 8.0;
        let advice = agricultural_advice(&snapshot, None);
        assert!(advice[0].starts_with("Low temperatures detected"));
    }

    #[test]
    fn test_crop_specific_advice() {
        let mut snapshot = calm_snapshot();
        snapshot.agricultural_metrics.soil_moisture = 45.0;
        assert!(agricultural_advice(&snapshot, Some("Rice"))[0].contains("rice cultivation"));

        let mut snapshot = calm_snapshot();
        snapshot.forecast[6].temp_max = 31.0;
        assert!(agricultural_advice(&snapshot, Some("wheat"))[0].contains("wheat grain filling"));

        let mut snapshot = calm_snapshot();
        snapshot.current.humidity = 75.0;
        assert!(agricultural_advice(&snapshot, Some("cotton"))[0].contains("bollworm"));
        assert_eq!(agricultural_advice(&snapshot, Some("onion")), vec![GENERAL_ADVICE.to_string()]);
        assert_eq!(agricultural_advice(&snapshot, Some(" cotton ")), vec![GENERAL_ADVICE.to_string()]);
    }

    #[test]
    fn test_soil_moisture_bands() {
        assert_eq!(soil_moisture_status(29.9), SoilMoistureStatus::Low);
        assert_eq!(soil_moisture_status(30.0), SoilMoistureStatus::Optimal);
        assert_eq!(soil_moisture_status(70.0), SoilMoistureStatus::Optimal);
        assert_eq!(soil_moisture_status(70.1), SoilMoistureStatus::High);
        assert_eq!(SoilMoistureStatus::High.description(), "High - Reduce irrigation");
    }
}
