//! Weather-driven disease risk scoring
//!
//! Each disease is scored by averaging per-factor proximity scores over the
//! factors that *contribute*: a range factor contributes only when the
//! observed value lies inside `[min, max]`, a flag factor only when its
//! condition holds. Non-contributing factors are left out of the average
//! rather than counted as zero, so a disease with no contributing factor
//! scores 0 while a barely in-range factor can still pull the average up.

use crate::diseases::diseases_for;
use crate::error::{AdvisoryError, AdvisoryResult};
use crate::models::{
    classify_risk, ConditionFactor, CropDiseaseRisk, DiseaseDefinition, DiseaseRisk,
    EnvironmentalVariable, FactorRange, SpecialCondition, WeatherSnapshot, RECENT_RAINFALL_DAYS,
};

const LOW_RAINFALL_DAILY_MM: f64 = 5.0;
const DROUGHT_SOIL_MOISTURE: f64 = 40.0;
const COOL_SOIL_TEMP: f64 = 18.0;
const WHITEFLY_MIN_TEMP: f64 = 28.0;
const WHITEFLY_MIN_HUMIDITY: f64 = 60.0;

const FALLBACK_RISK_FACTOR: &str = "Current weather conditions may support disease development";

/// Everything the scorer reads from a snapshot, gathered once per call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorObservations {
    pub temperature: f64,
    pub humidity: f64,
    /// Rainfall over the first three forecast days (mm)
    pub rainfall: f64,
    /// Estimated leaf wetness (hours)
    pub leaf_wetness: f64,
    pub low_rainfall: bool,
    pub drought: bool,
    pub cool_soil: bool,
    pub whiteflies: bool,
}

impl FactorObservations {
    pub fn observe(snapshot: &WeatherSnapshot) -> Self {
        let current = &snapshot.current;
        let low_rainfall = snapshot
            .forecast
            .iter()
            .take(RECENT_RAINFALL_DAYS)
            .all(|day| day.rainfall < LOW_RAINFALL_DAILY_MM);

        Self {
            temperature: current.temp,
            humidity: current.humidity,
            rainfall: snapshot.recent_rainfall(),
            leaf_wetness: estimate_leaf_wetness(current.humidity, current.precipitation),
            low_rainfall,
            drought: snapshot.agricultural_metrics.soil_moisture < DROUGHT_SOIL_MOISTURE,
            cool_soil: current.temp < COOL_SOIL_TEMP,
            whiteflies: current.temp > WHITEFLY_MIN_TEMP && current.humidity > WHITEFLY_MIN_HUMIDITY,
        }
    }

    pub fn value(&self, variable: EnvironmentalVariable) -> f64 {
        match variable {
            EnvironmentalVariable::Temperature => self.temperature,
            EnvironmentalVariable::Humidity => self.humidity,
            EnvironmentalVariable::Rainfall => self.rainfall,
            EnvironmentalVariable::LeafWetness => self.leaf_wetness,
        }
    }

    pub fn holds(&self, condition: SpecialCondition) -> bool {
        match condition {
            SpecialCondition::LowRainfall => self.low_rainfall,
            SpecialCondition::Drought => self.drought,
            SpecialCondition::CoolSoil => self.cool_soil,
            SpecialCondition::Whiteflies => self.whiteflies,
        }
    }
}

/// Leaf wetness hours approximated from humidity and current precipitation
pub fn estimate_leaf_wetness(humidity: f64, precipitation: f64) -> f64 {
    let base = if humidity >= 85.0 {
        12.0
    } else if humidity >= 75.0 {
        8.0
    } else {
        4.0
    };
    let rain_bonus = if precipitation > 0.0 { 6.0 } else { 0.0 };
    base + rain_bonus
}

/// Proximity of `value` to the optimum, or `None` when outside `[min, max]`
pub fn factor_score(range: &FactorRange, value: f64) -> Option<f64> {
    if !range.contains(value) {
        return None;
    }
    let half_width = range.half_width();
    if half_width <= 0.0 {
        return Some(100.0);
    }
    let score = 100.0 - (value - range.optimal).abs() / half_width * 100.0;
    Some(score.max(0.0))
}

/// Score of a single factor, `None` when it does not contribute
pub fn contribution(factor: &ConditionFactor, observations: &FactorObservations) -> Option<f64> {
    match factor {
        ConditionFactor::Range { variable, range } => {
            factor_score(range, observations.value(*variable))
        }
        ConditionFactor::Flag { condition } => observations.holds(*condition).then_some(100.0),
    }
}

/// Mean of the contributing factor scores; 0 when none contribute
pub fn disease_score(disease: &DiseaseDefinition, observations: &FactorObservations) -> f64 {
    let scores: Vec<f64> = disease
        .factors
        .iter()
        .filter_map(|factor| contribution(factor, observations))
        .collect();

    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Human-readable reasons, one per contributing factor
pub fn risk_factors(disease: &DiseaseDefinition, observations: &FactorObservations) -> Vec<String> {
    let mut factors: Vec<String> = disease
        .factors
        .iter()
        .filter(|factor| contribution(factor, observations).is_some())
        .map(|factor| describe_factor(factor, observations))
        .collect();

    if factors.is_empty() {
        factors.push(FALLBACK_RISK_FACTOR.to_string());
    }
    factors
}

fn describe_factor(factor: &ConditionFactor, observations: &FactorObservations) -> String {
    match factor {
        ConditionFactor::Range { variable, range } => {
            let value = observations.value(*variable);
            let reading = match variable {
                EnvironmentalVariable::Temperature => format!("{:.1}°C", value),
                EnvironmentalVariable::Humidity => format!("{:.0}%", value),
                EnvironmentalVariable::Rainfall => format!("{:.1} mm", value),
                EnvironmentalVariable::LeafWetness => {
                    return "Extended leaf wetness periods favorable for infection".to_string()
                }
            };
            let tolerance = match variable {
                EnvironmentalVariable::Temperature => 2.0,
                _ => 5.0,
            };
            let quality = if (value - range.optimal).abs() <= tolerance {
                "Optimal"
            } else {
                "Favorable"
            };
            format!(
                "{} {} ({}) for disease development",
                quality,
                variable.label(),
                reading
            )
        }
        ConditionFactor::Flag { condition } => match condition {
            SpecialCondition::LowRainfall => "Dry conditions favorable for disease development",
            SpecialCondition::Drought => "Drought stress increases susceptibility",
            SpecialCondition::CoolSoil => "Cool soil temperatures favor pathogen",
            SpecialCondition::Whiteflies => "Conditions favorable for whitefly vectors",
        }
        .to_string(),
    }
}

/// Assess one disease against pre-gathered observations
pub fn assess_disease(disease: &DiseaseDefinition, observations: &FactorObservations) -> DiseaseRisk {
    let risk_score = disease_score(disease, observations);
    let to_owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    DiseaseRisk {
        disease_name: disease.name.to_string(),
        risk_level: classify_risk(risk_score),
        risk_score,
        risk_factors: risk_factors(disease, observations),
        preventive_measures: to_owned(disease.preventive_measures),
        symptoms: to_owned(disease.symptoms),
        affected_crops: to_owned(disease.affected_crops),
        icon: disease.icon.to_string(),
    }
}

/// Score every known disease of `crop` against `snapshot`, highest risk first
pub fn score_disease_risk(snapshot: &WeatherSnapshot, crop: &str) -> AdvisoryResult<CropDiseaseRisk> {
    let definitions =
        diseases_for(crop).ok_or_else(|| AdvisoryError::UnsupportedCrop(crop.to_string()))?;
    let observations = FactorObservations::observe(snapshot);

    let mut diseases: Vec<DiseaseRisk> = definitions
        .iter()
        .map(|definition| assess_disease(definition, &observations))
        .collect();

    for disease in &diseases {
        tracing::debug!(
            crop,
            disease = %disease.disease_name,
            score = disease.risk_score,
            level = %disease.risk_level,
            "scored disease"
        );
    }

    let overall_risk_score = if diseases.is_empty() {
        0.0
    } else {
        diseases.iter().map(|d| d.risk_score).sum::<f64>() / diseases.len() as f64
    };

    // Stable: ties keep table order
    diseases.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));

    Ok(CropDiseaseRisk {
        crop: crop.to_string(),
        diseases,
        overall_risk: classify_risk(overall_risk_score),
        overall_risk_score,
    })
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn range_strategy() -> impl Strategy<Value = FactorRange> {
        (0.0..50.0f64, 0.1..20.0f64, 0.1..20.0f64).prop_map(|(min, below, above)| FactorRange {
            min,
            optimal: min + below,
            max: min + below + above,
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// In-range values score within [0, 100], out-of-range values are excluded
        #[test]
        fn prop_factor_score_bounded(range in range_strategy(), value in -10.0..100.0f64) {
            match factor_score(&range, value) {
                Some(score) => {
                    prop_assert!(range.contains(value));
                    prop_assert!((0.0..=100.0).contains(&score));
                }
                None => prop_assert!(!range.contains(value)),
            }
        }

        /// Moving toward the optimum never lowers the score
        #[test]
        fn prop_factor_score_peaks_at_optimum(range in range_strategy(), t in 0.0..1.0f64) {
            let value = range.min + (range.optimal - range.min) * t;
            let here = factor_score(&range, value).unwrap_or(0.0);
            let optimum = factor_score(&range, range.optimal).unwrap_or(0.0);
            prop_assert!(optimum >= here);
            prop_assert_eq!(optimum, 100.0);
        }

        /// Leaf wetness estimate only takes the documented values
        #[test]
        fn prop_leaf_wetness_values(humidity in 0.0..=100.0f64, precipitation in 0.0..40.0f64) {
            let hours = estimate_leaf_wetness(humidity, precipitation);
            prop_assert!([4.0, 8.0, 12.0, 10.0, 14.0, 18.0].contains(&hours));
        }
    }
}
