//! # Limit Engine (L2: Kernel)
//!
//! The risk-adjusted credit limit decision kernel.
//!
//! This crate provides:
//! - Base limit calculation from income and score band
//! - Multiplicative risk adjustment with hard clamp bounds
//! - Risk tier classification and ordered rationale generation
//! - Portfolio-scale batch evaluation with Rayon parallelisation
//!
//! Every operation is a pure, synchronous function over immutable inputs
//! plus a read-only [`ScoringConfig`](limit_core::ScoringConfig). The
//! engine never mutates a profile; it produces new derived records.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            limit_engine (L2)            │
//! ├─────────────────────────────────────────┤
//! │  limits    - base + risk-adjusted       │
//! │              limit calculation          │
//! │  classify  - risk tiers, rationale      │
//! │  portfolio - batch evaluation,          │
//! │              skip-and-report            │
//! │  parallel  - Rayon gating               │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │             limit_core (L1)             │
//! │  profiles, config, error taxonomy       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use limit_core::{CustomerProfile, ScoringConfig};
//! use limit_engine::{recommended_limit, PortfolioEngine};
//!
//! let config = ScoringConfig::default();
//! let profile = CustomerProfile::new("CUST_00001", 50_000.0, 700, 75_000.0)
//!     .with_utilization(0.30)
//!     .with_on_time_rate(0.95)
//!     .with_behavior_score(0.80)
//!     .with_default_probability(0.10);
//!
//! let limit = recommended_limit(&profile, &config).unwrap();
//! assert!(limit >= config.limit_floor && limit <= config.limit_ceiling);
//!
//! let engine = PortfolioEngine::new(config).unwrap();
//! let outcome = engine.recommend(&[profile]);
//! assert_eq!(outcome.recommendations.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod classify;
pub mod limits;
pub mod parallel;
pub mod portfolio;

// Re-export commonly used items
pub use classify::{assign_risk_tier, build_rationale};
pub use limits::{apply_risk_adjustment, base_limit, recommended_limit, risk_adjustment_multiplier};
pub use parallel::{ParallelConfig, DEFAULT_PARALLEL_THRESHOLD};
pub use portfolio::{BatchOutcome, PortfolioEngine, Recommendation};
