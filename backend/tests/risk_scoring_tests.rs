//! Disease risk scoring tests
//!
//! Tests for the advisory pipeline including:
//! - Synthesized snapshot invariants
//! - Unsupported crop rejection
//! - Ranking, mean aggregation and idempotence of the scorer
//! - Risk band boundaries and recommendation shape

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shared::{
    classify_risk, recommend_actions, score_disease_risk, supported_crops,
    synthesize_weather_with, validate_snapshot, AdvisoryError, RiskLevel, WeatherSnapshot,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 5, 30, 0).unwrap()
}

fn seeded_snapshot(location: &str, seed: u64) -> WeatherSnapshot {
    synthesize_weather_with(location, fixed_now(), &mut ChaCha8Rng::seed_from_u64(seed))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Rice Blast with temperature, humidity and rainfall at their optima
    #[test]
    fn test_rice_blast_scenario() {
        let mut snapshot = seeded_snapshot("Cuttack, Odisha", 7);
        snapshot.current.temp = 28.0;
        snapshot.current.humidity = 95.0;
        snapshot.current.precipitation = 0.0;
        for (day, rain) in snapshot.forecast.iter_mut().zip([4.0, 5.0, 6.0]) {
            day.rainfall = rain;
        }

        let report = score_disease_risk(&snapshot, "rice").unwrap();
        let blast = &report.diseases[0];
        assert_eq!(blast.disease_name, "Rice Blast");
        assert!(blast.risk_score >= 75.0);
        assert_eq!(blast.risk_level, RiskLevel::Severe);
    }

    #[test]
    fn test_banana_is_unsupported() {
        let snapshot = seeded_snapshot("Jalgaon, Maharashtra", 1);
        assert_eq!(
            score_disease_risk(&snapshot, "banana"),
            Err(AdvisoryError::UnsupportedCrop("banana".to_string()))
        );
    }

    #[test]
    fn test_padded_crop_is_unsupported() {
        let snapshot = seeded_snapshot("Cuttack, Odisha", 4);
        assert_eq!(
            score_disease_risk(&snapshot, " rice "),
            Err(AdvisoryError::UnsupportedCrop(" rice ".to_string()))
        );
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify_risk(75.0), RiskLevel::Severe);
        assert_eq!(classify_risk(74.999), RiskLevel::High);
        assert_eq!(classify_risk(50.0), RiskLevel::High);
        assert_eq!(classify_risk(25.0), RiskLevel::Moderate);
        assert_eq!(classify_risk(24.999), RiskLevel::Low);
        assert_eq!(classify_risk(0.0), RiskLevel::Low);
    }

    #[test]
    fn test_low_overall_gives_three_items() {
        let mut snapshot = seeded_snapshot("Nagpur, Maharashtra", 2);
        snapshot.current.temp = 45.0;
        snapshot.current.humidity = 10.0;
        snapshot.current.precipitation = 0.0;
        for day in snapshot.forecast.iter_mut() {
            day.rainfall = 0.0;
        }
        let report = score_disease_risk(&snapshot, "onion").unwrap();
        assert_eq!(report.overall_risk, RiskLevel::Low);

        let recommendations = recommend_actions(&report);
        assert_eq!(recommendations.len(), 3);
        assert!(recommendations.iter().all(|r| !r.is_header));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = score_disease_risk(&seeded_snapshot("Pune", 3), "maize").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["overallRiskScore"].is_number());
        assert!(json["diseases"][0]["riskFactors"].is_array());
        let level = json["overallRisk"].as_str().unwrap();
        assert!(["low", "moderate", "high", "severe"].contains(&level));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for free-text locations, including blank and comma-only input
    fn location_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just(",".to_string()),
            Just("Mumbai, Maharashtra".to_string()),
            Just("Ludhiana, Punjab".to_string()),
            Just("Kochi, Kerala".to_string()),
            "[a-zA-Z ,]{0,40}",
        ]
    }

    /// Strategy for supported crop names in mixed case
    fn crop_strategy() -> impl Strategy<Value = String> {
        (0..supported_crops().len(), any::<bool>()).prop_map(|(i, upper)| {
            let crop = supported_crops()[i];
            if upper {
                crop.to_uppercase()
            } else {
                crop.to_string()
            }
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every synthesized snapshot satisfies the structural invariants
        #[test]
        fn prop_synthesized_snapshot_valid(location in location_strategy(), seed in any::<u64>()) {
            let snapshot = seeded_snapshot(&location, seed);
            prop_assert_eq!(snapshot.forecast.len(), 7);
            prop_assert_eq!(validate_snapshot(&snapshot), Ok(()));
            prop_assert!(!snapshot.location.name.is_empty() || location.trim().is_empty());
        }

        /// Diseases come back ranked and the overall score is their mean
        #[test]
        fn prop_ranked_and_mean(
            location in location_strategy(),
            crop in crop_strategy(),
            seed in any::<u64>()
        ) {
            let snapshot = seeded_snapshot(&location, seed);
            let report = score_disease_risk(&snapshot, &crop).unwrap();

            for pair in report.diseases.windows(2) {
                prop_assert!(pair[0].risk_score >= pair[1].risk_score);
            }
            let mean = report.diseases.iter().map(|d| d.risk_score).sum::<f64>()
                / report.diseases.len() as f64;
            prop_assert!((report.overall_risk_score - mean).abs() < 1e-9);
            prop_assert_eq!(report.overall_risk, classify_risk(mean));

            for disease in &report.diseases {
                prop_assert!((0.0..=100.0).contains(&disease.risk_score));
                prop_assert_eq!(disease.risk_level, classify_risk(disease.risk_score));
                prop_assert!(!disease.risk_factors.is_empty());
            }
        }

        /// Scoring has no hidden state
        #[test]
        fn prop_scoring_idempotent(crop in crop_strategy(), seed in any::<u64>()) {
            let snapshot = seeded_snapshot("Coastal Andhra", seed);
            let first = score_disease_risk(&snapshot, &crop);
            let second = score_disease_risk(&snapshot, &crop);
            prop_assert_eq!(first, second);
        }

        /// Anything outside the table is rejected, whatever its case
        #[test]
        fn prop_unknown_crop_rejected(crop in "[a-z]{1,12}", seed in 0u64..50) {
            prop_assume!(!supported_crops().contains(&crop.as_str()));
            let snapshot = seeded_snapshot("Pune", seed);
            prop_assert_eq!(
                score_disease_risk(&snapshot, &crop.to_uppercase()),
                Err(AdvisoryError::UnsupportedCrop(crop.to_uppercase()))
            );
        }

        /// Headers only appear above elevated risk, and always precede bullets
        #[test]
        fn prop_recommendation_shape(crop in crop_strategy(), seed in any::<u64>()) {
            let snapshot = seeded_snapshot("Chennai, Tamil Nadu", seed);
            let report = score_disease_risk(&snapshot, &crop).unwrap();
            let recommendations = recommend_actions(&report);

            prop_assert!(!recommendations.is_empty());
            if report.overall_risk == RiskLevel::Low {
                prop_assert_eq!(recommendations.len(), 3);
            }
            prop_assert!(recommendations.iter().filter(|r| r.is_header).count() <= 2);
            prop_assert!(!recommendations.last().map(|r| r.is_header).unwrap_or(false));
        }

        /// Heavy rain alerts agree with the first two forecast days
        #[test]
        fn prop_heavy_rain_alert_consistent(location in location_strategy(), seed in any::<u64>()) {
            let snapshot = seeded_snapshot(&location, seed);
            let expected = snapshot.forecast.iter().take(2).any(|d| d.rain_chance > 75.0);
            let raised = snapshot.alerts.iter().any(|a| a.alert_type == "Heavy Rain");
            prop_assert_eq!(expected, raised);
        }
    }
}
