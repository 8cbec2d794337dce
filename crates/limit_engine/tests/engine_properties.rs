//! Property tests for the decision kernel invariants.
//!
//! The bounds invariant is the engine's core safety property: whatever
//! the inputs, a recommended limit never leaves the configured clamp
//! bounds. Monotonicity keeps the policy explainable: more risk can
//! never mean more credit.

use limit_core::{CustomerProfile, ScoringConfig};
use limit_engine::{base_limit, recommended_limit, risk_adjustment_multiplier};
use proptest::prelude::*;

fn arbitrary_profile() -> impl Strategy<Value = CustomerProfile> {
    (
        1.0_f64..2_000_000.0,
        300u16..=900,
        0.0_f64..=1.0,
        0.0_f64..=1.0,
        0.0_f64..=1.0,
        0.0_f64..=1.0,
        0.0_f64..=1.0,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(income, score, util, on_time, behavior, dp, dti, bankruptcy, delinquency)| {
                CustomerProfile::new("CUST_PROP", income, score, 50_000.0)
                    .with_utilization(util)
                    .with_on_time_rate(on_time)
                    .with_behavior_score(behavior)
                    .with_default_probability(dp)
                    .with_debt_to_income(dti)
                    .with_flags(bankruptcy, delinquency)
            },
        )
}

proptest! {
    #[test]
    fn prop_recommended_limit_within_bounds(profile in arbitrary_profile()) {
        let config = ScoringConfig::default();
        let limit = recommended_limit(&profile, &config).unwrap();
        prop_assert!(limit >= config.limit_floor);
        prop_assert!(limit <= config.limit_ceiling);
    }

    #[test]
    fn prop_risk_multiplier_within_bounds(
        dp in 0.0_f64..=1.0,
        util in 0.0_f64..=1.0,
        on_time in 0.0_f64..=1.0,
        behavior in 0.0_f64..=1.0,
    ) {
        let config = ScoringConfig::default();
        let multiplier = risk_adjustment_multiplier(dp, util, on_time, behavior, &config);
        prop_assert!(multiplier >= config.multiplier_floor);
        prop_assert!(multiplier <= config.multiplier_ceiling);
    }

    #[test]
    fn prop_higher_score_never_lowers_base(
        income in 1.0_f64..2_000_000.0,
        score in 300u16..=890,
        bump in 1u16..=10,
    ) {
        let config = ScoringConfig::default();
        let lower = base_limit(income, score, &config).unwrap();
        let higher = base_limit(income, score + bump, &config).unwrap();
        prop_assert!(higher >= lower);
    }

    #[test]
    fn prop_higher_default_probability_never_raises_limit(
        profile in arbitrary_profile(),
        dp_low in 0.0_f64..=1.0,
        dp_high in 0.0_f64..=1.0,
    ) {
        let config = ScoringConfig::default();
        let (dp_low, dp_high) = if dp_low <= dp_high {
            (dp_low, dp_high)
        } else {
            (dp_high, dp_low)
        };
        let safer = recommended_limit(&profile.clone().with_default_probability(dp_low), &config).unwrap();
        let riskier = recommended_limit(&profile.with_default_probability(dp_high), &config).unwrap();
        prop_assert!(riskier <= safer);
    }
}

#[test]
fn worst_case_inputs_still_bounded() {
    let config = ScoringConfig::default();
    let profile = CustomerProfile::new("CUST_WORST", 1_000_000.0, 300, 0.0)
        .with_utilization(1.0)
        .with_on_time_rate(0.0)
        .with_behavior_score(0.0)
        .with_default_probability(1.0)
        .with_debt_to_income(1.0)
        .with_flags(true, true);

    let limit = recommended_limit(&profile, &config).unwrap();
    assert!(limit >= config.limit_floor && limit <= config.limit_ceiling);
}
