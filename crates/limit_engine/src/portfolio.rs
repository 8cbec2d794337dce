//! Portfolio-scale batch evaluation.
//!
//! Maps every profile through the limit calculator and risk classifier
//! independently, with no cross-customer interaction, so large batches run
//! in parallel on Rayon. Output order always matches input order.
//!
//! Data contract violations follow a skip-and-report policy: the
//! offending record becomes a [`Diagnostic`] and is excluded from the
//! results (and from every downstream aggregate); the batch itself never
//! aborts.

use crate::classify::{assign_risk_tier, build_rationale};
use crate::limits::recommended_limit;
use crate::parallel::ParallelConfig;
use limit_core::{ConfigError, CustomerId, CustomerProfile, Diagnostic, RiskTier, ScoringConfig};
use rayon::prelude::*;

/// One credit limit recommendation row.
///
/// The recommended limit always lies within the configured
/// `[limit_floor, limit_ceiling]`. Change percentage is `None` when the
/// customer has no current limit to compare against: an explicit
/// not-applicable marker, never a fault.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Customer this row belongs to.
    pub customer_id: CustomerId,
    /// The customer's current limit, carried through for reporting.
    pub current_limit: f64,
    /// Recommended limit, clamped to the configured bounds.
    pub recommended_limit: f64,
    /// Recommended minus current limit.
    pub change_amount: f64,
    /// Change as a percentage of the current limit; `None` when the
    /// current limit is zero.
    pub change_percent: Option<f64>,
    /// Discrete risk classification.
    pub risk_tier: RiskTier,
    /// Ordered contributing-factor phrases.
    pub rationale: Vec<String>,
    /// The externally estimated default probability, carried through for
    /// scenario and stress aggregation.
    pub default_probability: f64,
    /// Credit score, carried through for reporting.
    pub credit_score: u16,
}

/// Result of evaluating a batch: accepted rows plus rejection diagnostics.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchOutcome {
    /// One recommendation per accepted profile, in input order.
    pub recommendations: Vec<Recommendation>,
    /// One diagnostic per rejected profile, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchOutcome {
    /// Number of accepted profiles.
    pub fn accepted_count(&self) -> usize {
        self.recommendations.len()
    }

    /// Number of rejected profiles.
    pub fn rejected_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Batch evaluator holding the immutable scoring policy.
///
/// Validates the configuration once at construction; a config that fails
/// validation blocks all computation, so `recommend` itself can never
/// fail fatally.
///
/// # Examples
///
/// ```
/// use limit_core::{CustomerProfile, ScoringConfig};
/// use limit_engine::PortfolioEngine;
///
/// let engine = PortfolioEngine::new(ScoringConfig::default()).unwrap();
/// let profiles = vec![
///     CustomerProfile::new("CUST_00001", 50_000.0, 700, 75_000.0)
///         .with_default_probability(0.10),
/// ];
///
/// let outcome = engine.recommend(&profiles);
/// assert_eq!(outcome.accepted_count(), 1);
/// assert!(outcome.diagnostics.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct PortfolioEngine {
    config: ScoringConfig,
    parallel: ParallelConfig,
}

impl PortfolioEngine {
    /// Creates an engine, validating the configuration.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            parallel: ParallelConfig::default(),
        })
    }

    /// Overrides the parallelisation gate.
    pub fn with_parallel_config(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// The scoring policy this engine evaluates against.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Evaluates a batch of profiles.
    ///
    /// Output order matches input order for both recommendations and
    /// diagnostics. Batches at or above the parallel threshold are
    /// evaluated concurrently; each customer's computation reads only the
    /// shared immutable configuration.
    pub fn recommend(&self, profiles: &[CustomerProfile]) -> BatchOutcome {
        tracing::debug!(customers = profiles.len(), "evaluating portfolio batch");

        let evaluated: Vec<Result<Recommendation, Diagnostic>> =
            if self.parallel.should_parallelize(profiles.len()) {
                profiles
                    .par_iter()
                    .enumerate()
                    .map(|(index, profile)| self.evaluate(index, profile))
                    .collect()
            } else {
                profiles
                    .iter()
                    .enumerate()
                    .map(|(index, profile)| self.evaluate(index, profile))
                    .collect()
            };

        let mut outcome = BatchOutcome {
            recommendations: Vec::with_capacity(profiles.len()),
            diagnostics: Vec::new(),
        };
        for result in evaluated {
            match result {
                Ok(recommendation) => outcome.recommendations.push(recommendation),
                Err(diagnostic) => outcome.diagnostics.push(diagnostic),
            }
        }

        tracing::debug!(
            accepted = outcome.accepted_count(),
            rejected = outcome.rejected_count(),
            "portfolio batch complete"
        );
        outcome
    }

    fn evaluate(
        &self,
        index: usize,
        profile: &CustomerProfile,
    ) -> Result<Recommendation, Diagnostic> {
        if let Err(err) = profile.validate(&self.config) {
            return Err(Diagnostic::from_profile_error(
                index,
                profile.id.clone(),
                &err,
            ));
        }

        // The config was validated at construction, so the band scan
        // cannot fall through for a score the profile check accepted.
        let recommended = recommended_limit(profile, &self.config).map_err(|err| {
            Diagnostic::new(index, profile.id.clone(), "credit_score", err.to_string())
        })?;

        let change_amount = recommended - profile.current_limit;
        let change_percent = if profile.current_limit > 0.0 {
            Some(change_amount / profile.current_limit * 100.0)
        } else {
            None
        };

        Ok(Recommendation {
            customer_id: profile.id.clone(),
            current_limit: profile.current_limit,
            recommended_limit: recommended,
            change_amount,
            change_percent,
            risk_tier: assign_risk_tier(profile.default_probability, &self.config),
            rationale: build_rationale(profile, &self.config),
            default_probability: profile.default_probability,
            credit_score: profile.credit_score,
        })
    }
}
