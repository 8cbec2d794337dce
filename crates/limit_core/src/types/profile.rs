//! Customer profile records.

use super::error::ProfileError;
use super::ids::CustomerId;
use crate::config::ScoringConfig;

/// One applicant or cardholder snapshot.
///
/// Constructed by the external data layer and read-only to the engine:
/// every downstream computation produces new derived records rather than
/// editing the input. The default probability is supplied by an external
/// estimator and treated purely as an input contract.
///
/// # Examples
///
/// ```
/// use limit_core::CustomerProfile;
///
/// let profile = CustomerProfile::new("CUST_00001", 50_000.0, 700, 75_000.0)
///     .with_utilization(0.30)
///     .with_on_time_rate(0.95)
///     .with_behavior_score(0.80)
///     .with_default_probability(0.10)
///     .with_debt_to_income(0.30);
///
/// assert_eq!(profile.credit_score, 700);
/// assert!(!profile.has_bankruptcy);
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CustomerProfile {
    /// Unique identifier within a batch.
    pub id: CustomerId,
    /// Monthly income in currency units. Must be positive.
    pub monthly_income: f64,
    /// Credit score on the configured scale (300-900 by default).
    pub credit_score: u16,
    /// Current credit limit in currency units. Zero means no existing limit.
    pub current_limit: f64,
    /// Credit utilization ratio in [0, 1].
    pub utilization: f64,
    /// On-time payment rate in [0, 1].
    pub on_time_rate: f64,
    /// Pre-computed behavioural composite in [0, 1].
    pub behavior_score: f64,
    /// Externally estimated default probability in [0, 1].
    pub default_probability: f64,
    /// Monthly debt payments as a share of income, in [0, 1].
    pub debt_to_income: f64,
    /// Prior bankruptcy on record.
    #[serde(default)]
    pub has_bankruptcy: bool,
    /// Prior loan default or write-off on record.
    #[serde(default)]
    pub has_delinquency: bool,
}

impl CustomerProfile {
    /// Creates a profile with the given identity and financial position.
    ///
    /// Behavioural fields start at neutral values (zero utilization,
    /// perfect payment rate, mid behaviour score, zero default
    /// probability, no debt, no flags); set them with the `with_*`
    /// builders.
    pub fn new(
        id: impl Into<CustomerId>,
        monthly_income: f64,
        credit_score: u16,
        current_limit: f64,
    ) -> Self {
        Self {
            id: id.into(),
            monthly_income,
            credit_score,
            current_limit,
            utilization: 0.0,
            on_time_rate: 1.0,
            behavior_score: 0.5,
            default_probability: 0.0,
            debt_to_income: 0.0,
            has_bankruptcy: false,
            has_delinquency: false,
        }
    }

    /// Sets the credit utilization ratio.
    pub fn with_utilization(mut self, utilization: f64) -> Self {
        self.utilization = utilization;
        self
    }

    /// Sets the on-time payment rate.
    pub fn with_on_time_rate(mut self, on_time_rate: f64) -> Self {
        self.on_time_rate = on_time_rate;
        self
    }

    /// Sets the behavioural composite score.
    pub fn with_behavior_score(mut self, behavior_score: f64) -> Self {
        self.behavior_score = behavior_score;
        self
    }

    /// Sets the externally estimated default probability.
    pub fn with_default_probability(mut self, default_probability: f64) -> Self {
        self.default_probability = default_probability;
        self
    }

    /// Sets the debt-to-income ratio.
    pub fn with_debt_to_income(mut self, debt_to_income: f64) -> Self {
        self.debt_to_income = debt_to_income;
        self
    }

    /// Sets the adverse-history flags.
    pub fn with_flags(mut self, has_bankruptcy: bool, has_delinquency: bool) -> Self {
        self.has_bankruptcy = has_bankruptcy;
        self.has_delinquency = has_delinquency;
        self
    }

    /// Checks the data contract for this record.
    ///
    /// Returns the first violation found, naming the offending field.
    /// Batch processing rejects the single record (skip-and-report);
    /// nothing here aborts a batch.
    pub fn validate(&self, config: &ScoringConfig) -> Result<(), ProfileError> {
        if !self.monthly_income.is_finite() || self.monthly_income <= 0.0 {
            return Err(ProfileError::InvalidIncome(self.monthly_income));
        }
        if self.credit_score < config.score_floor || self.credit_score > config.score_ceiling {
            return Err(ProfileError::ScoreOutOfScale {
                score: self.credit_score,
                floor: config.score_floor,
                ceiling: config.score_ceiling,
            });
        }
        if !self.current_limit.is_finite() || self.current_limit < 0.0 {
            return Err(ProfileError::InvalidCurrentLimit(self.current_limit));
        }
        for (field, value) in [
            ("utilization", self.utilization),
            ("on_time_rate", self.on_time_rate),
            ("behavior_score", self.behavior_score),
            ("default_probability", self.default_probability),
            ("debt_to_income", self.debt_to_income),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ProfileError::OutsideUnitInterval { field, value });
            }
        }
        Ok(())
    }
}
