//! End-to-end pipeline: profiles -> recommendations -> scenario and
//! stress analytics.
//!
//! The portfolio pass runs once; both analyses reuse its output.

use approx::assert_relative_eq;
use limit_analytics::{analyze_scenarios, stress_test, EconomicScenario, ShockScenario};
use limit_core::{CustomerProfile, RiskTier, ScoringConfig};
use limit_engine::PortfolioEngine;

fn batch() -> Vec<CustomerProfile> {
    vec![
        // 162_500 x 1.115 = 181_187.50
        CustomerProfile::new("CUST_00001", 50_000.0, 700, 75_000.0)
            .with_utilization(0.30)
            .with_on_time_rate(0.95)
            .with_behavior_score(0.80)
            .with_default_probability(0.10)
            .with_debt_to_income(0.30),
        // 75_000 x (0.97 x 1.1 + 0.2) = 95_025; no current limit
        CustomerProfile::new("CUST_00002", 20_000.0, 800, 0.0)
            .with_utilization(0.20)
            .with_on_time_rate(1.0)
            .with_behavior_score(1.0)
            .with_default_probability(0.05)
            .with_debt_to_income(0.10),
        // 250_000 x (0.64 x 0.9 + 0.07) = 161_500
        CustomerProfile::new("CUST_00003", 200_000.0, 400, 100_000.0)
            .with_utilization(0.95)
            .with_on_time_rate(0.50)
            .with_behavior_score(0.20)
            .with_default_probability(0.60)
            .with_debt_to_income(0.80)
            .with_flags(true, true),
    ]
}

#[test]
fn recommendations_match_hand_computation() {
    let engine = PortfolioEngine::new(ScoringConfig::default()).unwrap();
    let outcome = engine.recommend(&batch());

    assert_eq!(outcome.accepted_count(), 3);
    assert!(outcome.diagnostics.is_empty());

    let rows = &outcome.recommendations;
    assert_relative_eq!(rows[0].recommended_limit, 181_187.5, epsilon = 1e-9);
    assert_eq!(rows[0].risk_tier, RiskTier::Medium);

    assert_relative_eq!(rows[1].recommended_limit, 95_025.0, epsilon = 1e-6);
    assert_eq!(rows[1].risk_tier, RiskTier::Low);
    assert_eq!(rows[1].change_percent, None);

    assert_relative_eq!(rows[2].recommended_limit, 161_500.0, epsilon = 1e-6);
    assert_eq!(rows[2].risk_tier, RiskTier::VeryHigh);
    assert!(rows[2]
        .rationale
        .contains(&"Prior bankruptcy on record".to_string()));
}

#[test]
fn scenario_aggregates_follow_the_weighting_formula() {
    let config = ScoringConfig::default();
    let engine = PortfolioEngine::new(config.clone()).unwrap();
    let outcome = engine.recommend(&batch());

    let results = analyze_scenarios(&outcome.recommendations, &config);
    assert_eq!(results.len(), 3);

    let rows = &outcome.recommendations;
    let total: f64 = rows.iter().map(|r| r.recommended_limit).sum();
    let weighted: f64 = rows
        .iter()
        .map(|r| r.default_probability * r.recommended_limit)
        .sum::<f64>()
        / total;

    let normal = &results[0];
    assert_eq!(normal.scenario, EconomicScenario::Normal);
    assert_relative_eq!(normal.total_exposure, total, epsilon = 1e-9);
    assert_relative_eq!(normal.weighted_avg_risk.unwrap(), weighted, epsilon = 1e-12);
    assert_eq!(normal.high_risk_customers, 1);

    // The slowdown overlay is a flat 0.75 on every limit.
    let slowdown = &results[1];
    assert_relative_eq!(slowdown.total_exposure, total * 0.75, epsilon = 1e-9);
    assert!(slowdown.policy.starts_with("Slowdown:"));
}

#[test]
fn stress_battery_reuses_the_same_rows() {
    let config = ScoringConfig::default();
    let engine = PortfolioEngine::new(config.clone()).unwrap();
    let outcome = engine.recommend(&batch());
    let rows = &outcome.recommendations;

    let results = stress_test(rows, &ShockScenario::standard_set(), &config);
    assert_eq!(results.len(), 3);

    // Severe stress doubles probabilities: 0.2, 0.1, 1.0 (clamped).
    let severe = &results[2];
    let expected: f64 = rows
        .iter()
        .map(|r| (r.default_probability * 2.0).min(1.0) * r.recommended_limit)
        .sum();
    assert_relative_eq!(severe.expected_loss, expected, epsilon = 1e-9);

    // Only the third customer crosses the threshold under severe stress.
    assert_relative_eq!(
        severe.high_risk_exposure,
        rows[2].recommended_limit,
        epsilon = 1e-9
    );
    let total: f64 = rows.iter().map(|r| r.recommended_limit).sum();
    assert_relative_eq!(
        severe.concentration_ratio.unwrap(),
        rows[2].recommended_limit / total,
        epsilon = 1e-12
    );
}

#[test]
fn rejected_records_are_excluded_from_all_aggregates() {
    let config = ScoringConfig::default();
    let engine = PortfolioEngine::new(config.clone()).unwrap();

    let mut profiles = batch();
    profiles.push(
        CustomerProfile::new("CUST_BAD", 50_000.0, 700, 10_000.0).with_default_probability(2.0),
    );

    let outcome = engine.recommend(&profiles);
    assert_eq!(outcome.accepted_count(), 3);
    assert_eq!(outcome.rejected_count(), 1);
    assert_eq!(outcome.diagnostics[0].customer_id.as_str(), "CUST_BAD");

    let results = analyze_scenarios(&outcome.recommendations, &config);
    assert_eq!(results[0].customer_count, 3);
}
