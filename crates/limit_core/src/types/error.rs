//! Error types for structured error handling.
//!
//! This module provides:
//! - [`ConfigError`]: fatal configuration errors, reported at startup
//! - [`ProfileError`]: recoverable per-record data contract violations
//!
//! Configuration errors block any computation. Profile errors never abort
//! a batch; they are collected as [`Diagnostic`](super::Diagnostic)s
//! alongside the successful results.

use thiserror::Error;

/// Errors in the scoring configuration.
///
/// All variants are fatal: a configuration that fails validation must be
/// rejected at startup, before any customer is evaluated.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The score band table is empty.
    #[error("Score band table is empty")]
    EmptyScoreBands,

    /// Score bands are not strictly descending by minimum score.
    #[error("Score bands must be strictly descending by minimum score (band {index} breaks the order)")]
    UnorderedScoreBands {
        /// Index of the first band that breaks the descending order.
        index: usize,
    },

    /// The band table has no universal fallback band.
    #[error("Score band table has no catch-all band: lowest band starts at {0}")]
    MissingCatchAllBand(u16),

    /// A band multiplier is non-positive or non-finite.
    #[error("Invalid multiplier {value} for score band {index}")]
    InvalidBandMultiplier {
        /// Index of the offending band.
        index: usize,
        /// The rejected multiplier value.
        value: f64,
    },

    /// No band matched a credit score during lookup.
    ///
    /// Only reachable with a malformed band table that slipped past
    /// validation.
    #[error("No score band matches credit score {0}")]
    NoMatchingBand(u16),

    /// The credit score scale bounds are inverted.
    #[error("Credit score scale floor {floor} exceeds ceiling {ceiling}")]
    InvalidScoreScale {
        /// Lowest representable score.
        floor: u16,
        /// Highest representable score.
        ceiling: u16,
    },

    /// The absolute limit clamp bounds are invalid.
    #[error("Limit floor {floor} exceeds ceiling {ceiling}")]
    InvalidLimitBounds {
        /// Absolute floor for recommended limits.
        floor: f64,
        /// Absolute ceiling for recommended limits.
        ceiling: f64,
    },

    /// The risk multiplier clamp bounds are invalid.
    #[error("Multiplier floor {floor} exceeds ceiling {ceiling}")]
    InvalidMultiplierBounds {
        /// Lower clamp for the risk multiplier.
        floor: f64,
        /// Upper clamp for the risk multiplier.
        ceiling: f64,
    },

    /// The utilization thresholds are inverted or outside [0, 1].
    #[error("Invalid utilization thresholds: low {low}, high {high}")]
    InvalidUtilizationThresholds {
        /// Threshold below which the bonus applies.
        low: f64,
        /// Threshold above which the penalty applies.
        high: f64,
    },

    /// Risk tier breakpoints are not strictly ascending within (0, 1).
    #[error("Tier breakpoints must be strictly ascending within (0, 1)")]
    InvalidTierBreakpoints,

    /// A scalar policy parameter is out of range.
    #[error("Invalid value {value} for parameter {name}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A scenario multiplier is non-positive or non-finite.
    #[error("Invalid multiplier {value} for scenario {scenario}")]
    InvalidScenarioMultiplier {
        /// Name of the offending scenario.
        scenario: &'static str,
        /// The rejected multiplier value.
        value: f64,
    },

    /// Configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    FileError(String),

    /// Configuration file could not be parsed.
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// An environment variable override could not be parsed.
    #[error("Invalid environment override {name}: {value}")]
    EnvError {
        /// Name of the environment variable.
        name: String,
        /// The unparseable raw value.
        value: String,
    },
}

/// Per-record data contract violations.
///
/// A profile carrying one of these is rejected (skip-and-report) and never
/// contributes to aggregate statistics.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ProfileError {
    /// Monthly income must be positive and finite.
    #[error("monthly_income must be positive and finite, got {0}")]
    InvalidIncome(f64),

    /// Credit score lies outside the configured scale.
    #[error("credit_score {score} is outside the {floor}-{ceiling} scale")]
    ScoreOutOfScale {
        /// The rejected score.
        score: u16,
        /// Lowest representable score.
        floor: u16,
        /// Highest representable score.
        ceiling: u16,
    },

    /// Current limit must be non-negative and finite.
    ///
    /// Zero is accepted; a customer with no existing limit is a
    /// legitimate external-data condition.
    #[error("current_limit must be non-negative and finite, got {0}")]
    InvalidCurrentLimit(f64),

    /// A probability or ratio field lies outside [0, 1].
    #[error("{field} must lie within [0, 1], got {value}")]
    OutsideUnitInterval {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl ProfileError {
    /// Name of the profile field that violated the contract.
    pub fn field(&self) -> &'static str {
        match self {
            ProfileError::InvalidIncome(_) => "monthly_income",
            ProfileError::ScoreOutOfScale { .. } => "credit_score",
            ProfileError::InvalidCurrentLimit(_) => "current_limit",
            ProfileError::OutsideUnitInterval { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display_no_matching_band() {
        let err = ConfigError::NoMatchingBand(420);
        assert_eq!(format!("{}", err), "No score band matches credit score 420");
    }

    #[test]
    fn test_config_error_display_limit_bounds() {
        let err = ConfigError::InvalidLimitBounds {
            floor: 500_000.0,
            ceiling: 10_000.0,
        };
        assert_eq!(format!("{}", err), "Limit floor 500000 exceeds ceiling 10000");
    }

    #[test]
    fn test_config_error_display_env() {
        let err = ConfigError::EnvError {
            name: "LIMIT_RISK_WEIGHT".to_string(),
            value: "heavy".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid environment override LIMIT_RISK_WEIGHT: heavy"
        );
    }

    #[test]
    fn test_profile_error_field_names() {
        assert_eq!(ProfileError::InvalidIncome(-1.0).field(), "monthly_income");
        assert_eq!(
            ProfileError::ScoreOutOfScale {
                score: 950,
                floor: 300,
                ceiling: 900
            }
            .field(),
            "credit_score"
        );
        assert_eq!(
            ProfileError::OutsideUnitInterval {
                field: "utilization",
                value: 1.5
            }
            .field(),
            "utilization"
        );
    }

    #[test]
    fn test_profile_error_display() {
        let err = ProfileError::OutsideUnitInterval {
            field: "default_probability",
            value: 1.2,
        };
        assert_eq!(
            format!("{}", err),
            "default_probability must lie within [0, 1], got 1.2"
        );
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(ConfigError::EmptyScoreBands);
        assert!(err.to_string().contains("empty"));
    }
}
