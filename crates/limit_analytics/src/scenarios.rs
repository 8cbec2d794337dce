//! Macroeconomic scenario analysis.
//!
//! A scenario is a flat multiplicative overlay on the already
//! risk-adjusted limits: the calculator does not re-run, so the effect of
//! a scenario is interpretable as a single lever and the overlay is
//! exactly linear per customer. Adjusted limits are not re-clamped to
//! the absolute floor/ceiling; the overlay must stay linear.
//!
//! Portfolio risk is exposure-weighted (sum of probability x limit over
//! sum of limits), not a simple mean: a risky customer with a large line
//! moves the figure more than one with a small line.

use crate::policy::recommend_policy;
use limit_core::{ScenarioMultipliers, ScoringConfig};
use limit_engine::Recommendation;

/// Named macroeconomic conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EconomicScenario {
    /// Moderate growth, the baseline.
    Normal,
    /// Economic slowdown: conservative exposure.
    Slowdown,
    /// High-growth phase: expansive exposure.
    HighGrowth,
}

impl EconomicScenario {
    /// All scenarios, in reporting order.
    pub const ALL: [EconomicScenario; 3] = [
        EconomicScenario::Normal,
        EconomicScenario::Slowdown,
        EconomicScenario::HighGrowth,
    ];

    /// Human-readable scenario name.
    pub fn name(&self) -> &'static str {
        match self {
            EconomicScenario::Normal => "Normal",
            EconomicScenario::Slowdown => "Slowdown",
            EconomicScenario::HighGrowth => "High Growth",
        }
    }

    /// The exposure multiplier configured for this scenario.
    pub fn multiplier(&self, multipliers: &ScenarioMultipliers) -> f64 {
        match self {
            EconomicScenario::Normal => multipliers.normal,
            EconomicScenario::Slowdown => multipliers.slowdown,
            EconomicScenario::HighGrowth => multipliers.high_growth,
        }
    }
}

impl std::fmt::Display for EconomicScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Aggregate portfolio figures under one scenario.
///
/// The two ratio fields are `None` when their denominator is zero: a
/// portfolio with no exposure, or no existing limits to compare against.
/// That is a defined outcome, never a propagated numeric fault.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioResult {
    /// The scenario this row describes.
    pub scenario: EconomicScenario,
    /// Multiplier that was applied.
    pub multiplier: f64,
    /// Number of customers in the batch.
    pub customer_count: usize,
    /// Mean adjusted limit.
    pub average_limit: f64,
    /// Sum of adjusted limits.
    pub total_exposure: f64,
    /// Customers whose default probability exceeds the high-risk
    /// threshold.
    pub high_risk_customers: usize,
    /// Exposure-weighted average default probability; `None` on zero
    /// exposure.
    pub weighted_avg_risk: Option<f64>,
    /// Mean limit change versus current limits, as a percentage; `None`
    /// when the batch carries no current limits.
    pub avg_change_percent: Option<f64>,
    /// Generated policy recommendation.
    pub policy: String,
}

/// Runs every configured scenario over a recommendation set.
///
/// One [`ScenarioResult`] per scenario, in [`EconomicScenario::ALL`]
/// order. Purely derived from the rows; the recommendations are not
/// recomputed.
pub fn analyze_scenarios(
    recommendations: &[Recommendation],
    config: &ScoringConfig,
) -> Vec<ScenarioResult> {
    EconomicScenario::ALL
        .iter()
        .map(|&scenario| analyze_scenario(scenario, recommendations, config))
        .collect()
}

fn analyze_scenario(
    scenario: EconomicScenario,
    recommendations: &[Recommendation],
    config: &ScoringConfig,
) -> ScenarioResult {
    let multiplier = scenario.multiplier(&config.scenario_multipliers);
    let customer_count = recommendations.len();

    let total_exposure: f64 = recommendations
        .iter()
        .map(|r| r.recommended_limit * multiplier)
        .sum();
    let average_limit = if customer_count > 0 {
        total_exposure / customer_count as f64
    } else {
        0.0
    };

    let high_risk_customers = recommendations
        .iter()
        .filter(|r| r.default_probability > config.high_risk_threshold)
        .count();

    let weighted_avg_risk = if total_exposure > 0.0 {
        let weighted_sum: f64 = recommendations
            .iter()
            .map(|r| r.default_probability * r.recommended_limit * multiplier)
            .sum();
        Some(weighted_sum / total_exposure)
    } else {
        None
    };

    let total_current: f64 = recommendations.iter().map(|r| r.current_limit).sum();
    let avg_change_percent = if total_current > 0.0 {
        Some((total_exposure - total_current) / total_current * 100.0)
    } else {
        None
    };

    let mut result = ScenarioResult {
        scenario,
        multiplier,
        customer_count,
        average_limit,
        total_exposure,
        high_risk_customers,
        weighted_avg_risk,
        avg_change_percent,
        policy: String::new(),
    };
    result.policy = recommend_policy(&result);
    result
}
