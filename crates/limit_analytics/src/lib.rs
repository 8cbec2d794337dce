//! # Limit Analytics (L3: Application)
//!
//! Scenario analysis and stress testing over portfolio recommendations.
//!
//! This crate provides:
//! - Macroeconomic scenario overlays (normal / slowdown / high growth)
//! - Exposure-weighted portfolio risk aggregation
//! - A per-scenario policy decision table
//! - Default-probability shock stress testing with preset severities
//!
//! Both analyses consume the recommendation rows produced by
//! [`limit_engine`]: the pipeline runs once and its output is reused, so
//! scenario and stress figures always describe the same steady-state
//! portfolio.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │             limit_analytics (L3)             │
//! ├──────────────────────────────────────────────┤
//! │  scenarios - EconomicScenario overlays,      │
//! │              exposure-weighted aggregates    │
//! │  policy    - scenario policy sentences       │
//! │  stress    - ShockScenario, expected loss,   │
//! │              concentration metrics           │
//! └──────────────────────────────────────────────┘
//!          ↓
//! ┌──────────────────────────────────────────────┐
//! │              limit_engine (L2)               │
//! │  Recommendation rows, one pass per batch     │
//! └──────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod policy;
pub mod scenarios;
pub mod stress;

// Re-export commonly used items
pub use policy::recommend_policy;
pub use scenarios::{analyze_scenarios, EconomicScenario, ScenarioResult};
pub use stress::{stress_test, ShockScenario, StressTestResult};
