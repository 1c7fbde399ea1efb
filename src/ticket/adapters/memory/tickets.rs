//! In-memory ticket collection for session-scoped boards.

use std::sync::{Arc, RwLock};

use crate::ticket::{
    domain::{ImportedTicketRecord, ReportedOn, Ticket, TicketDraft, TicketId, TicketPatch},
    ports::{TicketStore, TicketStoreError, TicketStoreResult},
};

/// Thread-safe in-memory ticket store.
///
/// Tickets are kept in insertion order; the sequential token of a new ticket
/// is derived from the collection size at append time.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketStore {
    state: Arc<RwLock<Vec<Ticket>>>,
}

impl InMemoryTicketStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with legacy records.
    ///
    /// # Errors
    ///
    /// Returns [`TicketStoreError::DuplicateTicket`] when two records share
    /// a token.
    pub fn seeded(
        records: impl IntoIterator<Item = ImportedTicketRecord>,
    ) -> TicketStoreResult<Self> {
        let store = Self::new();
        for record in records {
            store.import(record)?;
        }
        Ok(store)
    }
}

impl TicketStore for InMemoryTicketStore {
    fn append(&self, draft: TicketDraft, reported_on: ReportedOn) -> TicketStoreResult<Ticket> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TicketStoreError::access(std::io::Error::other(err.to_string())))?;
        let id = TicketId::from_position(state.len().saturating_add(1));
        let ticket = Ticket::new(id, draft, reported_on);
        state.push(ticket.clone());
        Ok(ticket)
    }

    fn import(&self, record: ImportedTicketRecord) -> TicketStoreResult<Ticket> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TicketStoreError::access(std::io::Error::other(err.to_string())))?;
        if state.iter().any(|ticket| *ticket.id() == record.id) {
            return Err(TicketStoreError::DuplicateTicket(record.id));
        }
        let ticket = Ticket::from_imported(record);
        state.push(ticket.clone());
        Ok(ticket)
    }

    fn amend(&self, id: &TicketId, patch: TicketPatch) -> TicketStoreResult<Option<Ticket>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TicketStoreError::access(std::io::Error::other(err.to_string())))?;
        let amended = state.iter_mut().find(|ticket| ticket.id() == id).map(
            |ticket| {
                ticket.apply(patch);
                ticket.clone()
            },
        );
        Ok(amended)
    }

    fn find(&self, id: &TicketId) -> TicketStoreResult<Option<Ticket>> {
        let state = self
            .state
            .read()
            .map_err(|err| TicketStoreError::access(std::io::Error::other(err.to_string())))?;
        Ok(state.iter().find(|ticket| ticket.id() == id).cloned())
    }

    fn list(&self) -> TicketStoreResult<Vec<Ticket>> {
        let state = self
            .state
            .read()
            .map_err(|err| TicketStoreError::access(std::io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }
}
