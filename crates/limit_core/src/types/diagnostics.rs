//! Structured diagnostics for skip-and-report batch processing.

use super::error::ProfileError;
use super::ids::CustomerId;

/// One rejected record: which customer, which field, why.
///
/// Single-record failures never abort a batch. The portfolio engine
/// collects a `Diagnostic` per rejected profile and surfaces the list
/// alongside the successful results, so aggregate statistics are never
/// silently polluted.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    /// Position of the record in the input batch.
    pub index: usize,
    /// Identifier of the rejected customer.
    pub customer_id: CustomerId,
    /// Name of the field that violated the contract.
    pub field: &'static str,
    /// Human-readable reason.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic for a rejected record.
    pub fn new(
        index: usize,
        customer_id: CustomerId,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            index,
            customer_id,
            field,
            message: message.into(),
        }
    }

    /// Builds a diagnostic from a profile contract violation.
    pub fn from_profile_error(index: usize, customer_id: CustomerId, err: &ProfileError) -> Self {
        Self::new(index, customer_id, err.field(), err.to_string())
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "record {} ({}): {}",
            self.index, self.customer_id, self.message
        )
    }
}
