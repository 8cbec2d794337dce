//! Per-scenario policy recommendations.
//!
//! A decision table keyed by scenario identity, weighted portfolio risk,
//! and the high-risk customer count. Each scenario family carries its own
//! rule set: slowdown policy favours contraction, growth policy favours
//! selective expansion, so a generic risk-to-text mapping would lose the
//! asymmetry.

use crate::scenarios::{EconomicScenario, ScenarioResult};

// Decision-table thresholds.
const NORMAL_LOW_RISK: f64 = 0.20;
const NORMAL_MODERATE_RISK: f64 = 0.30;
const NORMAL_HIGH_RISK_COUNT: usize = 100;
const SLOWDOWN_HIGH_RISK: f64 = 0.30;
const SLOWDOWN_HIGH_RISK_COUNT: usize = 150;
const GROWTH_LOW_RISK: f64 = 0.25;
const GROWTH_HIGH_RISK_COUNT: usize = 80;

/// Produces the policy sentence for one scenario result.
///
/// Deterministic: the same aggregate figures always yield the same
/// sentence. A portfolio with no exposure gets its own defined outcome
/// instead of a risk judgement.
pub fn recommend_policy(result: &ScenarioResult) -> String {
    let scenario = result.scenario;
    let high_risk = result.high_risk_customers;

    let risk = match result.weighted_avg_risk {
        Some(risk) => risk,
        None => return format!("{}: No credit exposure to assess.", scenario.name()),
    };

    let sentence = match scenario {
        EconomicScenario::Normal => {
            if risk < NORMAL_LOW_RISK && high_risk < NORMAL_HIGH_RISK_COUNT {
                "Moderate growth strategy suitable. Low overall risk."
            } else if risk < NORMAL_MODERATE_RISK {
                "Balanced approach recommended. Moderate risk."
            } else {
                "Conservative approach needed. High risk profile."
            }
        }
        EconomicScenario::Slowdown => {
            if risk > SLOWDOWN_HIGH_RISK {
                "Strongly recommend credit reduction. High risk exposure during slowdown."
            } else if high_risk > SLOWDOWN_HIGH_RISK_COUNT {
                "Implement selective credit decreases. Monitor high-risk customers."
            } else {
                "Maintain conservative limits. Stable low-risk portfolio."
            }
        }
        EconomicScenario::HighGrowth => {
            if risk < GROWTH_LOW_RISK && high_risk < GROWTH_HIGH_RISK_COUNT {
                "Opportunity to expand credit. Strong customer base in growth phase."
            } else {
                "Selective credit expansion. Target low-risk segments."
            }
        }
    };

    format!("{}: {}", scenario.name(), sentence)
}
