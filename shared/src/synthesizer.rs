//! Synthetic weather generation
//!
//! Produces a plausible [`WeatherSnapshot`] for a free-text location without
//! any network access. A coarse regional heuristic biases the baselines and
//! bounded random jitter is applied on top. The random source is injected so
//! callers can seed it; [`synthesize_weather`] uses the thread-local generator.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::{
    AgriculturalMetrics, AlertSeverity, CurrentConditions, DailyForecast, LocationInfo,
    WeatherAlert, WeatherSnapshot, FORECAST_DAYS,
};
use crate::types::{CompassDirection, GpsCoordinates};

const DEFAULT_BASE_TEMP: f64 = 28.0;
const NORTH_BASE_TEMP: f64 = 22.0;
const SOUTH_BASE_TEMP: f64 = 30.0;
const COASTAL_BASE_TEMP: f64 = 29.0;

const HEAVY_RAIN_ALERT_CHANCE: f64 = 75.0;
const HEAT_WAVE_TEMP: f64 = 35.0;
const STRONG_WIND_SPEED: f64 = 15.0;

/// Regional hints found in a location string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionProfile {
    pub is_north: bool,
    pub is_south: bool,
    pub is_coastal: bool,
    /// Baseline air temperature (°C)
    pub base_temp: f64,
}

impl RegionProfile {
    /// Case-insensitive substring match; coastal wins over south, south over north
    pub fn detect(location: &str) -> Self {
        let lower = location.to_lowercase();
        let mentions = |hints: &[&str]| hints.iter().any(|hint| lower.contains(hint));

        let is_north = mentions(&["north", "punjab", "haryana"]);
        let is_south = mentions(&["south", "kerala", "tamil"]);
        let is_coastal = mentions(&["coastal", "mumbai", "chennai"]);

        let base_temp = if is_coastal {
            COASTAL_BASE_TEMP
        } else if is_south {
            SOUTH_BASE_TEMP
        } else if is_north {
            NORTH_BASE_TEMP
        } else {
            DEFAULT_BASE_TEMP
        };

        Self {
            is_north,
            is_south,
            is_coastal,
            base_temp,
        }
    }
}

/// Sky condition rolled from a day's rain probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyCondition {
    HeavyRain,
    LightRain,
    PartlyCloudy,
    Sunny,
}

impl SkyCondition {
    pub fn from_rain_chance(rain_chance: f64) -> Self {
        if rain_chance > 70.0 {
            SkyCondition::HeavyRain
        } else if rain_chance > 40.0 {
            SkyCondition::LightRain
        } else if rain_chance > 20.0 {
            SkyCondition::PartlyCloudy
        } else {
            SkyCondition::Sunny
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkyCondition::HeavyRain => "Heavy Rain",
            SkyCondition::LightRain => "Light Rain",
            SkyCondition::PartlyCloudy => "Partly Cloudy",
            SkyCondition::Sunny => "Sunny",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SkyCondition::HeavyRain => "cloud-rain",
            SkyCondition::LightRain => "cloud-drizzle",
            SkyCondition::PartlyCloudy => "cloud-sun",
            SkyCondition::Sunny => "sun",
        }
    }

    fn roll_rainfall<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            SkyCondition::HeavyRain => rng.gen_range(10.0..35.0),
            SkyCondition::LightRain => rng.gen_range(2.0..10.0),
            SkyCondition::PartlyCloudy | SkyCondition::Sunny => 0.0,
        }
    }
}

/// Synthesize weather for `location` using the current time and thread-local randomness
pub fn synthesize_weather(location: &str) -> WeatherSnapshot {
    synthesize_weather_with(location, Utc::now(), &mut rand::thread_rng())
}

/// Synthesize weather for `location` as of `now`, drawing all jitter from `rng`
pub fn synthesize_weather_with<R: Rng + ?Sized>(
    location: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> WeatherSnapshot {
    let profile = RegionProfile::detect(location);
    tracing::debug!(location, ?profile, "synthesizing weather");

    let current_temp = profile.base_temp + rng.gen_range(-3.0..3.0);
    let (humidity, wind_speed) = if profile.is_coastal {
        (rng.gen_range(70.0..85.0), rng.gen_range(12.0..20.0))
    } else {
        (rng.gen_range(50.0..70.0), rng.gen_range(8.0..14.0))
    };

    let forecast = build_forecast(&profile, now, humidity, wind_speed, rng);
    let alerts = derive_alerts(&forecast, current_temp, wind_speed, now);

    // Both are always present: build_forecast emits FORECAST_DAYS entries
    let today_rainfall = forecast.first().map(|day| day.rainfall).unwrap_or(0.0);
    let today_sky = forecast
        .first()
        .map(|day| SkyCondition::from_rain_chance(day.rain_chance))
        .unwrap_or(SkyCondition::Sunny);

    let (name, region) = split_location(location);
    let coordinates =
        GpsCoordinates::from_degrees(rng.gen_range(20.0..30.0), rng.gen_range(75.0..85.0));

    let current = CurrentConditions {
        temp: current_temp,
        feels_like: current_temp + if humidity > 70.0 { 2.0 } else { -1.0 },
        condition: today_sky.label().to_string(),
        humidity,
        wind_speed,
        wind_direction: CompassDirection::ALL[rng.gen_range(0..CompassDirection::ALL.len())],
        pressure: rng.gen_range(1010.0..1020.0),
        precipitation: today_rainfall,
        uv: rng.gen_range(7.0..11.0),
        visibility: if today_sky == SkyCondition::HeavyRain { 5.0 } else { 10.0 },
        is_day: true,
        icon: today_sky.icon().to_string(),
    };

    let wet_bonus = if today_rainfall > 0.0 { 20.0 } else { 0.0 };
    let soil_moisture: f64 = 40.0 + rng.gen_range(0.0..30.0) + wet_bonus;
    let agricultural_metrics = AgriculturalMetrics {
        soil_moisture: soil_moisture.clamp(0.0, 100.0),
        evapotranspiration: 4.0 + rng.gen_range(0.0..2.0),
        growing_degree_days: 10.0 + rng.gen_range(0.0..5.0),
    };

    WeatherSnapshot {
        location: LocationInfo {
            name,
            region,
            country: "India".to_string(),
            coordinates,
            localtime: now,
        },
        current,
        forecast,
        alerts,
        agricultural_metrics,
    }
}

fn build_forecast<R: Rng + ?Sized>(
    profile: &RegionProfile,
    now: DateTime<Utc>,
    humidity: f64,
    wind_speed: f64,
    rng: &mut R,
) -> Vec<DailyForecast> {
    let today = now.date_naive();

    (0..FORECAST_DAYS)
        .map(|offset| {
            let temp_variation = rng.gen_range(-3.0..3.0);
            let rain_chance = if profile.is_coastal {
                rng.gen_range(40.0..80.0)
            } else {
                rng.gen_range(20.0..50.0)
            };
            let sky = SkyCondition::from_rain_chance(rain_chance);
            let rainfall = sky.roll_rainfall(&mut *rng);

            DailyForecast {
                date: today + Duration::days(offset as i64),
                temp_max: profile.base_temp + temp_variation + 4.0,
                temp_min: profile.base_temp + temp_variation - 4.0,
                condition: sky.label().to_string(),
                humidity: (humidity + rng.gen_range(-5.0..5.0)).clamp(0.0, 100.0),
                wind_speed: (wind_speed + rng.gen_range(-2.0..2.0)).max(0.0),
                rain_chance,
                rainfall,
                icon: sky.icon().to_string(),
            }
        })
        .collect()
}

/// Alerts are checked in a fixed order: heavy rain, heat wave, strong winds
pub fn derive_alerts(
    forecast: &[DailyForecast],
    current_temp: f64,
    wind_speed: f64,
    now: DateTime<Utc>,
) -> Vec<WeatherAlert> {
    let mut alerts = Vec::new();

    let heavy_rain_soon = forecast
        .iter()
        .take(2)
        .any(|day| day.rain_chance > HEAVY_RAIN_ALERT_CHANCE);
    if heavy_rain_soon {
        alerts.push(WeatherAlert {
            alert_type: "Heavy Rain".to_string(),
            severity: AlertSeverity::Medium,
            message: "Heavy rainfall expected in the next 48 hours. Secure crops and ensure proper drainage."
                .to_string(),
            start_time: now,
            end_time: now + Duration::hours(48),
        });
    }

    if current_temp > HEAT_WAVE_TEMP {
        alerts.push(WeatherAlert {
            alert_type: "Heat Wave".to_string(),
            severity: AlertSeverity::High,
            message: "Heat wave conditions expected. Increase irrigation and provide shade for sensitive crops."
                .to_string(),
            start_time: now,
            end_time: now + Duration::hours(72),
        });
    }

    if wind_speed > STRONG_WIND_SPEED {
        alerts.push(WeatherAlert {
            alert_type: "Strong Winds".to_string(),
            severity: AlertSeverity::Medium,
            message: "Strong winds expected. Secure tall crops and delay spraying operations."
                .to_string(),
            start_time: now,
            end_time: now + Duration::hours(24),
        });
    }

    alerts
}

/// Split "Name, Region" on the first comma; only the region is trimmed
pub fn split_location(location: &str) -> (String, String) {
    let mut parts = location.split(',');

    let name = parts
        .next()
        .filter(|part| !part.is_empty())
        .unwrap_or(location);
    let region = parts
        .next()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .unwrap_or("Region");

    (name.to_string(), region.to_string())
}
