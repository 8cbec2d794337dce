//! Discrete risk tier classification.

use std::fmt;

/// Default-risk tier derived from a customer's default probability.
///
/// Tiers are ordered: `Low < Medium < High < VeryHigh`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum RiskTier {
    /// Default probability below the first breakpoint.
    Low,
    /// Default probability within the first band.
    Medium,
    /// Default probability within the second band.
    High,
    /// Default probability at or above the last breakpoint.
    VeryHigh,
}

impl RiskTier {
    /// Human-readable tier label.
    pub fn name(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
            RiskTier::VeryHigh => "Very High Risk",
        }
    }

    /// All tiers, least risky first.
    pub const ALL: [RiskTier; 4] = [
        RiskTier::Low,
        RiskTier::Medium,
        RiskTier::High,
        RiskTier::VeryHigh,
    ];
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
