//! Disease risk report models

use serde::{Deserialize, Serialize};

/// Banded risk classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score below 25
    Low,
    /// 25 to under 50
    Moderate,
    /// 50 to under 75
    High,
    /// 75 and above
    Severe,
}

impl RiskLevel {
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Severe)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Moderate => write!(f, "moderate"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Severe => write!(f, "severe"),
        }
    }
}

/// Classify a 0-100 risk score into its band
pub fn classify_risk(score: f64) -> RiskLevel {
    if score >= 75.0 {
        RiskLevel::Severe
    } else if score >= 50.0 {
        RiskLevel::High
    } else if score >= 25.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Risk computed for one disease against one snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRisk {
    pub disease_name: String,
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub risk_factors: Vec<String>,
    pub preventive_measures: Vec<String>,
    pub symptoms: Vec<String>,
    pub affected_crops: Vec<String>,
    pub icon: String,
}

/// Ranked risk report for a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropDiseaseRisk {
    pub crop: String,
    /// Highest score first
    pub diseases: Vec<DiseaseRisk>,
    pub overall_risk: RiskLevel,
    pub overall_risk_score: f64,
}

/// One line of advice; headers introduce the bullets that follow them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub is_header: bool,
    pub text: String,
}

impl Recommendation {
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            is_header: true,
            text: text.into(),
        }
    }

    pub fn item(text: impl Into<String>) -> Self {
        Self {
            is_header: false,
            text: text.into(),
        }
    }
}
