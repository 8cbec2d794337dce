//! Identifier types for customer records.
//!
//! Using a newtype ensures type safety and prevents accidental misuse of
//! identifiers as plain strings.

use std::fmt;

/// Unique identifier for a customer within a batch.
///
/// # Examples
///
/// ```
/// use limit_core::CustomerId;
///
/// let id = CustomerId::new("CUST_00042");
/// assert_eq!(id.as_str(), "CUST_00042");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Creates a new customer ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CustomerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
