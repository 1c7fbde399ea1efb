//! Error types for ticket domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain ticket values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TicketDomainError {
    /// The ticket identifier is empty after trimming.
    #[error("ticket identifier must not be empty")]
    EmptyTicketId,

    /// The ticket title is empty after trimming.
    #[error("ticket title must not be empty")]
    EmptyTitle,

    /// The month index is outside the `0..=11` range.
    #[error("invalid month index {0}, expected 0..=11")]
    InvalidMonthIndex(u32),
}

/// Error returned while parsing a priority from its storage representation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing a status from its storage representation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);
