//! Credit limit calculation.
//!
//! The pipeline is two multiplicative stages followed by one hard clamp:
//!
//! 1. Base limit from income and the creditworthiness band:
//!    `income x base_multiplier x band_multiplier`.
//! 2. A risk multiplier built from default probability, utilization,
//!    payment history, and the behavioural composite, clamped to the
//!    configured multiplier bounds before it scales the base.
//! 3. The final unconditional clamp to `[limit_floor, limit_ceiling]`,
//!    the bounds invariant that holds for every possible input.

use limit_core::{ConfigError, CustomerProfile, ScoringConfig};

/// Computes the base credit limit from income and credit score.
///
/// Bands are scanned highest-first; the first band whose `min_score` the
/// score meets or exceeds wins. A score below every band indicates a
/// malformed table (missing catch-all) and fails with
/// [`ConfigError::NoMatchingBand`].
///
/// # Examples
///
/// ```
/// use limit_core::ScoringConfig;
/// use limit_engine::base_limit;
///
/// let config = ScoringConfig::default();
/// // 50_000 x 2.5 x 1.5 (the 750+ band)
/// assert_eq!(base_limit(50_000.0, 750, &config).unwrap(), 187_500.0);
/// ```
pub fn base_limit(
    monthly_income: f64,
    credit_score: u16,
    config: &ScoringConfig,
) -> Result<f64, ConfigError> {
    for band in &config.score_bands {
        if credit_score >= band.min_score {
            return Ok(monthly_income * config.base_multiplier * band.multiplier);
        }
    }
    Err(ConfigError::NoMatchingBand(credit_score))
}

/// Computes the clamped risk multiplier from behavioural signals.
///
/// Starts at `1 - default_probability x risk_weight`. Utilization above
/// the high threshold multiplies in the penalty factor; utilization below
/// the low threshold multiplies in the bonus factor; a value exactly at a
/// threshold receives neither. On-time rate and behaviour score then add
/// their weighted bonuses. The result is clamped to the configured
/// multiplier bounds.
pub fn risk_adjustment_multiplier(
    default_probability: f64,
    utilization: f64,
    on_time_rate: f64,
    behavior_score: f64,
    config: &ScoringConfig,
) -> f64 {
    let mut multiplier = 1.0 - default_probability * config.risk_weight;

    if utilization > config.high_utilization_threshold {
        multiplier *= config.high_utilization_penalty;
    } else if utilization < config.low_utilization_threshold {
        multiplier *= config.low_utilization_bonus;
    }

    multiplier += on_time_rate * config.payment_weight;
    multiplier += behavior_score * config.behavior_weight;

    multiplier.clamp(config.multiplier_floor, config.multiplier_ceiling)
}

/// Applies the risk adjustment to a base limit.
pub fn apply_risk_adjustment(
    base: f64,
    default_probability: f64,
    utilization: f64,
    on_time_rate: f64,
    behavior_score: f64,
    config: &ScoringConfig,
) -> f64 {
    base * risk_adjustment_multiplier(
        default_probability,
        utilization,
        on_time_rate,
        behavior_score,
        config,
    )
}

/// Computes the recommended credit limit for one customer.
///
/// Composes [`base_limit`] and [`apply_risk_adjustment`], then clamps to
/// `[limit_floor, limit_ceiling]`. The clamp is unconditional and always
/// the last operation: it is the invariant that protects the portfolio
/// against pathological inputs.
pub fn recommended_limit(
    profile: &CustomerProfile,
    config: &ScoringConfig,
) -> Result<f64, ConfigError> {
    let base = base_limit(profile.monthly_income, profile.credit_score, config)?;
    let adjusted = apply_risk_adjustment(
        base,
        profile.default_probability,
        profile.utilization,
        profile.on_time_rate,
        profile.behavior_score,
        config,
    );
    Ok(adjusted.clamp(config.limit_floor, config.limit_ceiling))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use limit_core::ScoreBand;

    fn reference_profile() -> CustomerProfile {
        CustomerProfile::new("CUST_00001", 50_000.0, 700, 75_000.0)
            .with_utilization(0.30)
            .with_on_time_rate(0.95)
            .with_behavior_score(0.80)
            .with_default_probability(0.10)
    }

    #[test]
    fn test_base_limit_band_lookup() {
        let config = ScoringConfig::default();
        assert_relative_eq!(base_limit(50_000.0, 800, &config).unwrap(), 187_500.0);
        assert_relative_eq!(base_limit(50_000.0, 750, &config).unwrap(), 187_500.0);
        assert_relative_eq!(base_limit(50_000.0, 749, &config).unwrap(), 162_500.0);
        assert_relative_eq!(base_limit(50_000.0, 700, &config).unwrap(), 162_500.0);
        assert_relative_eq!(base_limit(50_000.0, 650, &config).unwrap(), 137_500.0);
        assert_relative_eq!(base_limit(50_000.0, 550, &config).unwrap(), 125_000.0);
        assert_relative_eq!(base_limit(50_000.0, 450, &config).unwrap(), 100_000.0);
        assert_relative_eq!(base_limit(50_000.0, 300, &config).unwrap(), 62_500.0);
    }

    #[test]
    fn test_base_limit_no_matching_band() {
        let mut config = ScoringConfig::default();
        config.score_bands = vec![ScoreBand::new(750, 1.5)];
        assert!(matches!(
            base_limit(50_000.0, 700, &config),
            Err(ConfigError::NoMatchingBand(700))
        ));
    }

    #[test]
    fn test_band_crossing_never_decreases_base() {
        let config = ScoringConfig::default();
        let mut previous = 0.0;
        for score in (300..=900).step_by(10) {
            let base = base_limit(50_000.0, score, &config).unwrap();
            assert!(
                base >= previous,
                "base limit decreased at score {}: {} < {}",
                score,
                base,
                previous
            );
            previous = base;
        }
    }

    #[test]
    fn test_risk_multiplier_reference_value() {
        let config = ScoringConfig::default();
        // 1 - 0.10 x 0.6 = 0.94; utilization 0.30 sits exactly at the low
        // threshold and receives neither adjustment; + 0.095 + 0.08.
        let multiplier = risk_adjustment_multiplier(0.10, 0.30, 0.95, 0.80, &config);
        assert_relative_eq!(multiplier, 1.115, epsilon = 1e-12);
    }

    #[test]
    fn test_utilization_threshold_boundaries() {
        let config = ScoringConfig::default();
        let neutral = risk_adjustment_multiplier(0.0, 0.5, 0.0, 0.0, &config);

        // Exactly at a threshold: neither penalty nor bonus.
        assert_relative_eq!(
            risk_adjustment_multiplier(0.0, 0.8, 0.0, 0.0, &config),
            neutral
        );
        assert_relative_eq!(
            risk_adjustment_multiplier(0.0, 0.3, 0.0, 0.0, &config),
            neutral
        );

        // Just past them: penalty and bonus respectively.
        assert!(risk_adjustment_multiplier(0.0, 0.81, 0.0, 0.0, &config) < neutral);
        assert!(risk_adjustment_multiplier(0.0, 0.29, 0.0, 0.0, &config) > neutral);
    }

    #[test]
    fn test_multiplier_clamped_to_bounds() {
        let mut config = ScoringConfig::default();
        // Certain default with the stock weights bottoms out at 0.36;
        // raise the risk weight so the raw multiplier goes negative.
        config.risk_weight = 1.5;
        let floor = risk_adjustment_multiplier(1.0, 1.0, 0.0, 0.0, &config);
        assert_relative_eq!(floor, config.multiplier_floor);

        // Best case cannot exceed the ceiling either.
        let best = risk_adjustment_multiplier(0.0, 0.0, 1.0, 1.0, &config);
        assert!(best <= config.multiplier_ceiling);
    }

    #[test]
    fn test_increasing_default_probability_never_increases_limit() {
        let config = ScoringConfig::default();
        let mut previous = f64::INFINITY;
        for step in 0..=20 {
            let dp = step as f64 / 20.0;
            let profile = reference_profile().with_default_probability(dp);
            let limit = recommended_limit(&profile, &config).unwrap();
            assert!(
                limit <= previous,
                "adjusted limit increased at dp {}: {} > {}",
                dp,
                limit,
                previous
            );
            previous = limit;
        }
    }

    #[test]
    fn test_recommended_limit_reference_scenario() {
        let config = ScoringConfig::default();
        // 162_500 x 1.115 = 181_187.50, within [10_000, 500_000].
        let limit = recommended_limit(&reference_profile(), &config).unwrap();
        assert_relative_eq!(limit, 181_187.5, epsilon = 1e-9);
    }

    #[test]
    fn test_recommended_limit_hits_ceiling() {
        let config = ScoringConfig::default();
        let profile = CustomerProfile::new("CUST_HIGH", 400_000.0, 820, 100_000.0)
            .with_utilization(0.10)
            .with_on_time_rate(1.0)
            .with_behavior_score(1.0);
        let limit = recommended_limit(&profile, &config).unwrap();
        assert_relative_eq!(limit, config.limit_ceiling);
    }

    #[test]
    fn test_recommended_limit_hits_floor() {
        let config = ScoringConfig::default();
        let profile = CustomerProfile::new("CUST_LOW", 1_000.0, 310, 5_000.0)
            .with_utilization(1.0)
            .with_on_time_rate(0.0)
            .with_behavior_score(0.0)
            .with_default_probability(1.0);
        let limit = recommended_limit(&profile, &config).unwrap();
        assert_relative_eq!(limit, config.limit_floor);
    }
}
