//! Default-probability shock stress testing.
//!
//! A shock scales every customer's default probability and clamps the
//! result to [0, 1]; a shock cannot push a probability outside its valid
//! domain. Expected loss is the unconditional sum of stressed probability
//! times limit, not an economic-capital figure. The high-risk threshold
//! is the same one the scenario analyzer uses, so stress buckets stay
//! consistent with steady-state risk tiers.

use limit_core::ScoringConfig;
use limit_engine::Recommendation;

/// One named stress shock: a multiplier applied to default probabilities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShockScenario {
    /// Human-readable shock name.
    pub name: String,
    /// Multiplier applied to every default probability.
    pub multiplier: f64,
}

impl ShockScenario {
    /// Creates a named shock.
    pub fn new(name: impl Into<String>, multiplier: f64) -> Self {
        Self {
            name: name.into(),
            multiplier,
        }
    }

    /// Mild stress: probabilities up 25%.
    pub fn mild() -> Self {
        Self::new("Mild Stress", 1.25)
    }

    /// Moderate stress: probabilities up 50%.
    pub fn moderate() -> Self {
        Self::new("Moderate Stress", 1.5)
    }

    /// Severe stress: probabilities doubled.
    pub fn severe() -> Self {
        Self::new("Severe Stress", 2.0)
    }

    /// The standard three-shock battery, mildest first.
    pub fn standard_set() -> Vec<Self> {
        vec![Self::mild(), Self::moderate(), Self::severe()]
    }
}

/// Aggregate portfolio figures under one shock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StressTestResult {
    /// Name of the shock this row describes.
    pub scenario: String,
    /// Multiplier that was applied to default probabilities.
    pub shock_multiplier: f64,
    /// Sum of stressed probability x recommended limit.
    pub expected_loss: f64,
    /// Sum of limits whose stressed probability exceeds the high-risk
    /// threshold.
    pub high_risk_exposure: f64,
    /// High-risk exposure over total exposure; `None` on zero exposure.
    pub concentration_ratio: Option<f64>,
    /// Mean stressed default probability across the batch.
    pub avg_stressed_probability: f64,
}

/// Runs every shock over a recommendation set.
///
/// One [`StressTestResult`] per shock, in the caller's order. Purely
/// derived; the recommendations are not recomputed.
pub fn stress_test(
    recommendations: &[Recommendation],
    shocks: &[ShockScenario],
    config: &ScoringConfig,
) -> Vec<StressTestResult> {
    shocks
        .iter()
        .map(|shock| run_shock(recommendations, shock, config))
        .collect()
}

fn run_shock(
    recommendations: &[Recommendation],
    shock: &ShockScenario,
    config: &ScoringConfig,
) -> StressTestResult {
    let stressed: Vec<f64> = recommendations
        .iter()
        .map(|r| (r.default_probability * shock.multiplier).clamp(0.0, 1.0))
        .collect();

    let expected_loss: f64 = recommendations
        .iter()
        .zip(&stressed)
        .map(|(r, p)| p * r.recommended_limit)
        .sum();

    let total_exposure: f64 = recommendations.iter().map(|r| r.recommended_limit).sum();
    let high_risk_exposure: f64 = recommendations
        .iter()
        .zip(&stressed)
        .filter(|(_, p)| **p > config.high_risk_threshold)
        .map(|(r, _)| r.recommended_limit)
        .sum();

    let concentration_ratio = if total_exposure > 0.0 {
        Some(high_risk_exposure / total_exposure)
    } else {
        None
    };

    let avg_stressed_probability = if stressed.is_empty() {
        0.0
    } else {
        stressed.iter().sum::<f64>() / stressed.len() as f64
    };

    StressTestResult {
        scenario: shock.name.clone(),
        shock_multiplier: shock.multiplier,
        expected_loss,
        high_risk_exposure,
        concentration_ratio,
        avg_stressed_probability,
    }
}
