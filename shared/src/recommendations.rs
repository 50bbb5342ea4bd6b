//! Preventive recommendations derived from a crop risk report

use crate::models::{CropDiseaseRisk, Recommendation, RiskLevel};

/// Diseases considered for specific advice, taken from the top of the ranking
const TOP_DISEASES: usize = 2;
/// Preventive measures listed under each disease header
const MEASURES_PER_DISEASE: usize = 3;

const LOW_RISK_ADVICE: [&str; 3] = [
    "Continue regular monitoring of your crop for any signs of disease",
    "Maintain good field sanitation practices",
    "Ensure balanced nutrition for strong plant health",
];

fn general_advice(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Severe => &[
            "Consider applying preventive fungicides/bactericides immediately",
            "Increase monitoring frequency to daily checks",
        ],
        RiskLevel::High => &[
            "Consider applying preventive treatments within the next few days",
            "Monitor your crop every 2-3 days for early symptoms",
        ],
        RiskLevel::Moderate => &[
            "Prepare preventive treatments but wait for early symptoms before applying",
            "Monitor your crop weekly for any signs of disease",
        ],
        RiskLevel::Low => &[],
    }
}

/// Ordered advice lines for a computed risk report
///
/// A low overall risk yields three generic monitoring items. Otherwise each
/// of the two highest-ranked diseases at high or severe risk gets a header
/// followed by up to three of its preventive measures, and the list closes
/// with general advice for the overall band.
pub fn recommend_actions(risk: &CropDiseaseRisk) -> Vec<Recommendation> {
    if risk.overall_risk == RiskLevel::Low {
        return LOW_RISK_ADVICE.iter().copied().map(Recommendation::item).collect();
    }

    let mut recommendations = Vec::new();

    for disease in risk
        .diseases
        .iter()
        .take(TOP_DISEASES)
        .filter(|d| d.risk_level.is_elevated())
    {
        recommendations.push(Recommendation::header(format!(
            "For {} prevention:",
            disease.disease_name
        )));
        recommendations.extend(
            disease
                .preventive_measures
                .iter()
                .take(MEASURES_PER_DISEASE)
                .map(|measure| Recommendation::item(measure.as_str())),
        );
    }

    recommendations.extend(
        general_advice(risk.overall_risk)
            .iter()
            .copied()
            .map(Recommendation::item),
    );

    recommendations
}
