//! Store port for the in-session ticket collection.

use crate::ticket::domain::{
    ImportedTicketRecord, ReportedOn, Ticket, TicketDraft, TicketId, TicketPatch,
};
use std::sync::Arc;
use thiserror::Error;

/// Result type for ticket store operations.
pub type TicketStoreResult<T> = Result<T, TicketStoreError>;

/// Ticket collection contract.
///
/// Mutations are synchronous and atomic from the caller's perspective; the
/// collection lives for the session only. Operations over unknown
/// identifiers are no-ops, never errors.
pub trait TicketStore: Send + Sync {
    /// Appends a new ticket, assigning the next sequential token from the
    /// current collection size and stamping the given reporting date.
    ///
    /// Referential fields (project, module, assignee) are stored as given,
    /// without existence checks.
    ///
    /// # Errors
    ///
    /// Returns [`TicketStoreError::Access`] when the collection cannot be
    /// reached.
    fn append(&self, draft: TicketDraft, reported_on: ReportedOn) -> TicketStoreResult<Ticket>;

    /// Inserts a fully-specified record at the legacy-import boundary.
    ///
    /// # Errors
    ///
    /// Returns [`TicketStoreError::DuplicateTicket`] when the record's token
    /// is already present.
    fn import(&self, record: ImportedTicketRecord) -> TicketStoreResult<Ticket>;

    /// Merges patch fields into the matching ticket.
    ///
    /// Returns the amended ticket, or `None` (not an error) when no ticket
    /// matches the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TicketStoreError::Access`] when the collection cannot be
    /// reached.
    fn amend(&self, id: &TicketId, patch: TicketPatch) -> TicketStoreResult<Option<Ticket>>;

    /// Finds a ticket by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TicketStoreError::Access`] when the collection cannot be
    /// reached.
    fn find(&self, id: &TicketId) -> TicketStoreResult<Option<Ticket>>;

    /// Returns every ticket in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TicketStoreError::Access`] when the collection cannot be
    /// reached.
    fn list(&self) -> TicketStoreResult<Vec<Ticket>>;
}

/// Errors returned by ticket store implementations.
#[derive(Debug, Clone, Error)]
pub enum TicketStoreError {
    /// A ticket with the same token already exists (import path only).
    #[error("duplicate ticket identifier: {0}")]
    DuplicateTicket(TicketId),

    /// The underlying collection could not be accessed.
    #[error("store access error: {0}")]
    Access(Arc<dyn std::error::Error + Send + Sync>),
}

impl TicketStoreError {
    /// Wraps an infrastructure access error.
    pub fn access(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Access(Arc::new(err))
    }
}
