//! Core domain types for credit limit decisioning.
//!
//! This module provides:
//! - [`CustomerId`]: strongly-typed customer identifier
//! - [`CustomerProfile`]: one applicant snapshot, read-only to the engine
//! - [`RiskTier`]: discrete default-risk classification
//! - [`ConfigError`] / [`ProfileError`]: the error taxonomy
//! - [`Diagnostic`]: structured per-record failure report

mod diagnostics;
mod error;
mod ids;
mod profile;
mod tier;

pub use diagnostics::Diagnostic;
pub use error::{ConfigError, ProfileError};
pub use ids::CustomerId;
pub use profile::CustomerProfile;
pub use tier::RiskTier;
