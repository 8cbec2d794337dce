//! # Limit Core (L1: Foundation)
//!
//! Domain types and scoring configuration for the credline credit limit
//! decision engine.
//!
//! This crate provides:
//! - Customer profile records and strongly-typed identifiers
//! - The `ScoringConfig` policy surface (score bands, weights, clamp
//!   bounds, scenario multipliers) with TOML and environment loading
//! - The error taxonomy: fatal configuration errors and recoverable
//!   per-record data contract violations
//! - Structured diagnostics for skip-and-report batch processing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             limit_core (L1)             │
//! ├─────────────────────────────────────────┤
//! │  types/   - CustomerProfile, RiskTier,  │
//! │             CustomerId, Diagnostic      │
//! │  config/  - ScoringConfig, ScoreBand,   │
//! │             ScenarioMultipliers         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use limit_core::{CustomerProfile, ScoringConfig};
//!
//! let config = ScoringConfig::default();
//! config.validate().unwrap();
//!
//! let profile = CustomerProfile::new("CUST_00001", 50_000.0, 700, 75_000.0)
//!     .with_utilization(0.30)
//!     .with_on_time_rate(0.95)
//!     .with_behavior_score(0.80)
//!     .with_default_probability(0.10);
//!
//! assert!(profile.validate(&config).is_ok());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod types;

// Re-export commonly used types
pub use config::{ScenarioMultipliers, ScoreBand, ScoringConfig};
pub use types::{ConfigError, CustomerId, CustomerProfile, Diagnostic, ProfileError, RiskTier};
