//! Risk tier classification and rationale generation.
//!
//! Tier assignment is a pure threshold lookup against the ascending
//! breakpoints in the configuration. The rationale builder is a fixed
//! rule table: an ordered list of (predicate, phrase) pairs evaluated in
//! definition order, so the output reads the same way for every customer.

use limit_core::{CustomerProfile, RiskTier, ScoringConfig};

/// Maps a default probability to its discrete risk tier.
///
/// Ties at a breakpoint resolve to the riskier bucket: a probability
/// exactly equal to a breakpoint belongs to the tier above it.
///
/// # Examples
///
/// ```
/// use limit_core::{RiskTier, ScoringConfig};
/// use limit_engine::assign_risk_tier;
///
/// let config = ScoringConfig::default();
/// assert_eq!(assign_risk_tier(0.05, &config), RiskTier::Low);
/// assert_eq!(assign_risk_tier(0.10, &config), RiskTier::Medium);
/// ```
pub fn assign_risk_tier(default_probability: f64, config: &ScoringConfig) -> RiskTier {
    let [low, medium, high] = config.tier_breakpoints;
    if default_probability < low {
        RiskTier::Low
    } else if default_probability < medium {
        RiskTier::Medium
    } else if default_probability < high {
        RiskTier::High
    } else {
        RiskTier::VeryHigh
    }
}

// Rationale predicate thresholds. The utilization cut-offs come from the
// config so the phrases stay consistent with the limit adjustment.
const EXCELLENT_SCORE: u16 = 750;
const STRONG_SCORE: u16 = 700;
const WEAK_SCORE: u16 = 550;
const STRONG_PAYMENT_RATE: f64 = 0.95;
const POOR_PAYMENT_RATE: f64 = 0.70;
const GOOD_BEHAVIOR_SCORE: f64 = 0.80;
const HEAVY_DEBT_RATIO: f64 = 0.60;

/// Neutral phrase when no predicate fires.
const NEUTRAL_PHRASE: &str = "Balanced profile";

type RationaleRule = fn(&CustomerProfile, &ScoringConfig) -> Option<&'static str>;

fn score_phrase(profile: &CustomerProfile, _config: &ScoringConfig) -> Option<&'static str> {
    if profile.credit_score >= EXCELLENT_SCORE {
        Some("Excellent credit score")
    } else if profile.credit_score >= STRONG_SCORE {
        Some("Strong credit score")
    } else if profile.credit_score < WEAK_SCORE {
        Some("Weak credit score")
    } else {
        None
    }
}

fn payment_phrase(profile: &CustomerProfile, _config: &ScoringConfig) -> Option<&'static str> {
    if profile.on_time_rate > STRONG_PAYMENT_RATE {
        Some("Strong payment history")
    } else if profile.on_time_rate < POOR_PAYMENT_RATE {
        Some("Poor payment history")
    } else {
        None
    }
}

fn utilization_phrase(profile: &CustomerProfile, config: &ScoringConfig) -> Option<&'static str> {
    if profile.utilization > config.high_utilization_threshold {
        Some("High current utilization")
    } else if profile.utilization < config.low_utilization_threshold {
        Some("Low utilization pattern")
    } else {
        None
    }
}

fn behavior_phrase(profile: &CustomerProfile, _config: &ScoringConfig) -> Option<&'static str> {
    (profile.behavior_score > GOOD_BEHAVIOR_SCORE).then_some("Good customer behavior")
}

fn debt_phrase(profile: &CustomerProfile, _config: &ScoringConfig) -> Option<&'static str> {
    (profile.debt_to_income > HEAVY_DEBT_RATIO).then_some("Heavy existing debt load")
}

fn bankruptcy_phrase(profile: &CustomerProfile, _config: &ScoringConfig) -> Option<&'static str> {
    profile.has_bankruptcy.then_some("Prior bankruptcy on record")
}

fn delinquency_phrase(profile: &CustomerProfile, _config: &ScoringConfig) -> Option<&'static str> {
    profile
        .has_delinquency
        .then_some("Prior delinquency on record")
}

// Evaluated in definition order; the output order never varies.
const RATIONALE_RULES: &[RationaleRule] = &[
    score_phrase,
    payment_phrase,
    utilization_phrase,
    behavior_phrase,
    debt_phrase,
    bankruptcy_phrase,
    delinquency_phrase,
];

/// Builds the ordered rationale for a customer's recommendation.
///
/// One short phrase per firing predicate, in predicate-definition order
/// (score band, payment rate, utilization, behaviour score, debt ratio,
/// bankruptcy, delinquency). A profile that trips nothing gets the single
/// neutral phrase. Deterministic and side-effect free.
pub fn build_rationale(profile: &CustomerProfile, config: &ScoringConfig) -> Vec<String> {
    let phrases: Vec<String> = RATIONALE_RULES
        .iter()
        .filter_map(|rule| rule(profile, config))
        .map(str::to_string)
        .collect();

    if phrases.is_empty() {
        vec![NEUTRAL_PHRASE.to_string()]
    } else {
        phrases
    }
}
