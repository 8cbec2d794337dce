//! Scoring configuration management.
//!
//! The [`ScoringConfig`] holds every business-policy parameter of the
//! decision engine: score bands, risk weights, utilization thresholds,
//! clamp bounds, tier breakpoints, and scenario multipliers. It is loaded
//! once at startup, validated, and treated as read-only thereafter.
//!
//! Loading precedence (highest to lowest):
//! 1. `LIMIT_*` environment variables
//! 2. TOML configuration file
//! 3. Built-in defaults

use crate::types::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One creditworthiness band: the first band whose `min_score` the
/// customer's credit score meets or exceeds supplies the multiplier.
///
/// Bands are ordered highest-first and are non-uniform in width, so the
/// lookup is an ordered scan, not a numeric formula.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBand {
    /// Minimum credit score for this band.
    pub min_score: u16,
    /// Base-limit multiplier applied within this band.
    pub multiplier: f64,
}

impl ScoreBand {
    /// Creates a new band.
    pub fn new(min_score: u16, multiplier: f64) -> Self {
        Self {
            min_score,
            multiplier,
        }
    }
}

/// Fixed exposure multipliers for the named macroeconomic scenarios.
///
/// Conservative under slowdown, expansive under growth. A plain immutable
/// lookup, not a dispatch surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMultipliers {
    /// Moderate growth, the baseline.
    pub normal: f64,
    /// Economic slowdown.
    pub slowdown: f64,
    /// High-growth phase.
    pub high_growth: f64,
}

impl Default for ScenarioMultipliers {
    fn default() -> Self {
        Self {
            normal: 1.0,
            slowdown: 0.75,
            high_growth: 1.25,
        }
    }
}

/// Process-wide scoring policy, write-once-at-startup, read-many.
///
/// Every threshold and multiplier of the engine lives here so business
/// policy can change without code changes. [`ScoringConfig::validate`]
/// is fatal: a configuration that fails it blocks all computation.
///
/// # Examples
///
/// ```
/// use limit_core::ScoringConfig;
///
/// let config = ScoringConfig::from_toml_str(r#"
///     base_multiplier = 3.0
///     limit_ceiling = 750000.0
/// "#).unwrap();
///
/// assert_eq!(config.base_multiplier, 3.0);
/// // Unspecified fields keep their defaults.
/// assert_eq!(config.risk_weight, 0.6);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Base credit limit = monthly income x this multiplier.
    pub base_multiplier: f64,
    /// Creditworthiness bands, strictly descending by `min_score`,
    /// ending in a universal catch-all band.
    pub score_bands: Vec<ScoreBand>,
    /// Lowest representable credit score.
    pub score_floor: u16,
    /// Highest representable credit score.
    pub score_ceiling: u16,
    /// Weight of the default probability in the risk multiplier.
    pub risk_weight: f64,
    /// Utilization above this threshold attracts the penalty factor.
    pub high_utilization_threshold: f64,
    /// Penalty factor for over-extended customers.
    pub high_utilization_penalty: f64,
    /// Utilization below this threshold attracts the bonus factor.
    pub low_utilization_threshold: f64,
    /// Bonus factor rewarding low utilization.
    pub low_utilization_bonus: f64,
    /// Additive weight of the on-time payment rate.
    pub payment_weight: f64,
    /// Additive weight of the behavioural composite.
    pub behavior_weight: f64,
    /// Lower clamp for the risk multiplier.
    pub multiplier_floor: f64,
    /// Upper clamp for the risk multiplier.
    pub multiplier_ceiling: f64,
    /// Absolute floor for recommended limits.
    pub limit_floor: f64,
    /// Absolute ceiling for recommended limits.
    pub limit_ceiling: f64,
    /// Ascending default-probability breakpoints separating the four
    /// risk tiers. A probability exactly at a breakpoint belongs to the
    /// riskier tier above it.
    pub tier_breakpoints: [f64; 3],
    /// Default probability above which a customer counts as high-risk in
    /// scenario and stress aggregates.
    pub high_risk_threshold: f64,
    /// Named macroeconomic scenario multipliers.
    pub scenario_multipliers: ScenarioMultipliers,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_multiplier: 2.5,
            score_bands: vec![
                ScoreBand::new(750, 1.5),
                ScoreBand::new(700, 1.3),
                ScoreBand::new(650, 1.1),
                ScoreBand::new(550, 1.0),
                ScoreBand::new(450, 0.8),
                ScoreBand::new(0, 0.5),
            ],
            score_floor: 300,
            score_ceiling: 900,
            risk_weight: 0.6,
            high_utilization_threshold: 0.8,
            high_utilization_penalty: 0.9,
            low_utilization_threshold: 0.3,
            low_utilization_bonus: 1.1,
            payment_weight: 0.1,
            behavior_weight: 0.1,
            multiplier_floor: 0.2,
            multiplier_ceiling: 2.0,
            limit_floor: 10_000.0,
            limit_ceiling: 500_000.0,
            tier_breakpoints: [0.10, 0.25, 0.40],
            high_risk_threshold: 0.35,
            scenario_multipliers: ScenarioMultipliers::default(),
        }
    }
}

impl ScoringConfig {
    /// Creates a configuration with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    ///
    /// Any failure here is fatal and must block computation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.score_bands.is_empty() {
            return Err(ConfigError::EmptyScoreBands);
        }
        for (index, window) in self.score_bands.windows(2).enumerate() {
            if window[0].min_score <= window[1].min_score {
                return Err(ConfigError::UnorderedScoreBands { index: index + 1 });
            }
        }
        for (index, band) in self.score_bands.iter().enumerate() {
            if !band.multiplier.is_finite() || band.multiplier <= 0.0 {
                return Err(ConfigError::InvalidBandMultiplier {
                    index,
                    value: band.multiplier,
                });
            }
        }
        if self.score_floor >= self.score_ceiling {
            return Err(ConfigError::InvalidScoreScale {
                floor: self.score_floor,
                ceiling: self.score_ceiling,
            });
        }
        // The last band must cover every representable score.
        let lowest = self.score_bands[self.score_bands.len() - 1].min_score;
        if lowest > self.score_floor {
            return Err(ConfigError::MissingCatchAllBand(lowest));
        }
        if !self.base_multiplier.is_finite() || self.base_multiplier <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "base_multiplier",
                value: self.base_multiplier,
            });
        }
        for (name, value) in [
            ("risk_weight", self.risk_weight),
            ("payment_weight", self.payment_weight),
            ("behavior_weight", self.behavior_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        for (name, value) in [
            ("high_utilization_penalty", self.high_utilization_penalty),
            ("low_utilization_bonus", self.low_utilization_bonus),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        let (low, high) = (
            self.low_utilization_threshold,
            self.high_utilization_threshold,
        );
        if !low.is_finite() || !high.is_finite() || low >= high || low < 0.0 || high > 1.0 {
            return Err(ConfigError::InvalidUtilizationThresholds { low, high });
        }
        if !self.multiplier_floor.is_finite()
            || !self.multiplier_ceiling.is_finite()
            || self.multiplier_floor < 0.0
            || self.multiplier_floor > self.multiplier_ceiling
        {
            return Err(ConfigError::InvalidMultiplierBounds {
                floor: self.multiplier_floor,
                ceiling: self.multiplier_ceiling,
            });
        }
        if !self.limit_floor.is_finite()
            || !self.limit_ceiling.is_finite()
            || self.limit_floor < 0.0
            || self.limit_floor > self.limit_ceiling
        {
            return Err(ConfigError::InvalidLimitBounds {
                floor: self.limit_floor,
                ceiling: self.limit_ceiling,
            });
        }
        let [a, b, c] = self.tier_breakpoints;
        if !(a.is_finite() && b.is_finite() && c.is_finite())
            || !(0.0 < a && a < b && b < c && c < 1.0)
        {
            return Err(ConfigError::InvalidTierBreakpoints);
        }
        if !self.high_risk_threshold.is_finite()
            || !(0.0..1.0).contains(&self.high_risk_threshold)
            || self.high_risk_threshold <= 0.0
        {
            return Err(ConfigError::InvalidParameter {
                name: "high_risk_threshold",
                value: self.high_risk_threshold,
            });
        }
        for (scenario, value) in [
            ("normal", self.scenario_multipliers.normal),
            ("slowdown", self.scenario_multipliers.slowdown),
            ("high_growth", self.scenario_multipliers.high_growth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidScenarioMultiplier { scenario, value });
            }
        }
        Ok(())
    }

    /// Parses and validates a configuration from a TOML string.
    ///
    /// Unspecified fields keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Loads a configuration from `LIMIT_*` environment variables on top
    /// of the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a configuration from all sources.
    ///
    /// Priority (highest to lowest): environment variables, the given
    /// TOML file, built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        match path {
            Some(p) => tracing::info!(
                bands = config.score_bands.len(),
                file = %p.display(),
                "scoring configuration loaded"
            ),
            None => tracing::info!(
                bands = config.score_bands.len(),
                "scoring configuration loaded from defaults"
            ),
        }
        Ok(config)
    }

    /// Applies scalar overrides from `LIMIT_*` environment variables.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(v) = env_f64("LIMIT_BASE_MULTIPLIER")? {
            self.base_multiplier = v;
        }
        if let Some(v) = env_f64("LIMIT_RISK_WEIGHT")? {
            self.risk_weight = v;
        }
        if let Some(v) = env_f64("LIMIT_PAYMENT_WEIGHT")? {
            self.payment_weight = v;
        }
        if let Some(v) = env_f64("LIMIT_BEHAVIOR_WEIGHT")? {
            self.behavior_weight = v;
        }
        if let Some(v) = env_f64("LIMIT_FLOOR")? {
            self.limit_floor = v;
        }
        if let Some(v) = env_f64("LIMIT_CEILING")? {
            self.limit_ceiling = v;
        }
        if let Some(v) = env_f64("LIMIT_MULTIPLIER_FLOOR")? {
            self.multiplier_floor = v;
        }
        if let Some(v) = env_f64("LIMIT_MULTIPLIER_CEILING")? {
            self.multiplier_ceiling = v;
        }
        if let Some(v) = env_f64("LIMIT_HIGH_RISK_THRESHOLD")? {
            self.high_risk_threshold = v;
        }
        Ok(())
    }
}

fn env_f64(name: &'static str) -> Result<Option<f64>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::EnvError {
                name: name.to_string(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}
