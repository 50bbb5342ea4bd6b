//! Crop disease reference models

use serde::Serialize;

/// Static description of a crop disease and the weather that favours it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseDefinition {
    pub name: &'static str,
    pub pathogen: &'static str,
    pub factors: &'static [ConditionFactor],
    pub symptoms: &'static [&'static str],
    pub preventive_measures: &'static [&'static str],
    pub affected_crops: &'static [&'static str],
    pub icon: &'static str,
}

/// One condition used to score a disease against a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConditionFactor {
    /// Environmental variable scored by proximity to its optimum
    Range {
        variable: EnvironmentalVariable,
        range: FactorRange,
    },
    /// Special condition that counts fully when it holds
    Flag { condition: SpecialCondition },
}

impl ConditionFactor {
    pub const fn range(variable: EnvironmentalVariable, min: f64, optimal: f64, max: f64) -> Self {
        ConditionFactor::Range {
            variable,
            range: FactorRange { min, optimal, max },
        }
    }

    pub const fn flag(condition: SpecialCondition) -> Self {
        ConditionFactor::Flag { condition }
    }
}

/// `{min, optimal, max}` bounds, in the unit of the variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorRange {
    pub min: f64,
    pub optimal: f64,
    pub max: f64,
}

impl FactorRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Largest distance from the optimum to either bound
    pub fn half_width(&self) -> f64 {
        (self.optimal - self.min).max(self.max - self.optimal)
    }
}

/// Snapshot-derived variables a range factor can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvironmentalVariable {
    /// `current.temp` (°C)
    Temperature,
    /// `current.humidity` (%)
    Humidity,
    /// Rainfall summed over the first three forecast days (mm)
    Rainfall,
    /// Estimated leaf wetness duration (hours)
    LeafWetness,
}

impl EnvironmentalVariable {
    pub fn label(&self) -> &'static str {
        match self {
            EnvironmentalVariable::Temperature => "temperature",
            EnvironmentalVariable::Humidity => "humidity",
            EnvironmentalVariable::Rainfall => "rainfall",
            EnvironmentalVariable::LeafWetness => "leaf wetness",
        }
    }
}

/// Threshold rules evaluated over the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialCondition {
    /// Each of the first three forecast days has under 5 mm of rain
    LowRainfall,
    /// Soil moisture below 40%
    Drought,
    /// Air temperature below 18°C
    CoolSoil,
    /// Warm and humid enough for whitefly vectors
    Whiteflies,
}
