//! Identifier types for the ticket domain.

use super::TicketDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique ticket token, assigned once at creation and never reassigned.
///
/// New tickets receive a sequential, zero-padded token derived from the
/// current collection size (`T-001`, `T-002`, ...). Imported tickets keep
/// whatever token the previous tracker assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Creates a ticket identifier from an existing token.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyTicketId`] when the token is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TicketDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TicketDomainError::EmptyTicketId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Builds the sequential token for the given 1-based collection position.
    #[must_use]
    pub fn from_position(position: usize) -> Self {
        Self(format!("T-{position:03}"))
    }

    /// Returns the token as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric ticket number carried over from the previous tracker.
///
/// Display-only; legacy numbers were not unique across projects and are
/// never used for lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyId(u64);

impl LegacyId {
    /// Wraps a legacy ticket number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LegacyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
