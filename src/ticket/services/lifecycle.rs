//! Service layer for ticket creation, amendment, and board-flow moves.

use crate::directory::domain::{DirectoryDomainError, UserName};
use crate::taxonomy::domain::{ModuleName, ProjectName, TaxonomyDomainError};
use crate::ticket::{
    domain::{
        MoveDirection, Priority, ReportedOn, Status, Ticket, TicketDomainError, TicketDraft,
        TicketId, TicketPatch,
    },
    ports::{TicketStore, TicketStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a ticket from raw form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicketRequest {
    project: String,
    module: String,
    title: String,
    description: String,
    priority: Priority,
    status: Status,
    assignee: Option<String>,
}

impl CreateTicketRequest {
    /// Creates a request with the creation form's defaults (medium priority,
    /// pending status, empty description, no assignee).
    #[must_use]
    pub fn new(
        project: impl Into<String>,
        module: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            module: module.into(),
            title: title.into(),
            description: String::new(),
            priority: Priority::Medium,
            status: Status::Pending,
            assignee: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the assignee name.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

/// Outcome of an amendment: either the merged ticket or an untouched store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmendOutcome {
    /// The matching ticket after the merge.
    Amended(Ticket),
    /// No ticket matched the identifier; nothing was written.
    Unchanged,
}

/// Outcome of a board-flow move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The ticket after its status changed.
    Moved(Ticket),
    /// The move clamped or targeted a side-state; nothing was written.
    Unchanged,
}

/// Service-level errors for ticket lifecycle operations.
#[derive(Debug, Error)]
pub enum TicketLifecycleError {
    /// Ticket field validation failed.
    #[error(transparent)]
    Domain(#[from] TicketDomainError),
    /// Project or module name validation failed.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyDomainError),
    /// Assignee name validation failed.
    #[error(transparent)]
    Directory(#[from] DirectoryDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TicketStoreError),
}

/// Result type for ticket lifecycle service operations.
pub type TicketLifecycleResult<T> = Result<T, TicketLifecycleError>;

/// Ticket lifecycle orchestration service.
#[derive(Clone)]
pub struct TicketLifecycleService<S, C>
where
    S: TicketStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TicketLifecycleService<S, C>
where
    S: TicketStore,
    C: Clock + Send + Sync,
{
    /// Creates a new ticket lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a ticket from raw form input, stamping the reporting date
    /// from the clock.
    ///
    /// Referential fields are validated for shape only; whether the project,
    /// module, or assignee exists in its store is intentionally not checked.
    ///
    /// # Errors
    ///
    /// Returns [`TicketLifecycleError`] when name or title validation fails
    /// or the store rejects the append.
    pub fn create(&self, request: CreateTicketRequest) -> TicketLifecycleResult<Ticket> {
        let CreateTicketRequest {
            project,
            module,
            title,
            description,
            priority,
            status,
            assignee,
        } = request;

        let project_name = ProjectName::new(project)?;
        let module_name = ModuleName::new(module)?;
        let assignee_name = assignee.map(UserName::new).transpose()?;

        let mut draft = TicketDraft::new(project_name, module_name, title)?
            .with_description(description)
            .with_priority(priority)
            .with_status(status);
        if let Some(name) = assignee_name {
            draft = draft.with_assignee(name);
        }

        let reported_on = ReportedOn::today(&*self.clock);
        Ok(self.store.append(draft, reported_on)?)
    }

    /// Merges a patch into the matching ticket.
    ///
    /// An unknown identifier is a no-op, reported as
    /// [`AmendOutcome::Unchanged`].
    ///
    /// # Errors
    ///
    /// Returns [`TicketLifecycleError::Store`] when the store cannot be
    /// reached.
    pub fn amend(&self, id: &TicketId, patch: TicketPatch) -> TicketLifecycleResult<AmendOutcome> {
        let amended = self.store.amend(id, patch)?;
        Ok(amended.map_or(AmendOutcome::Unchanged, AmendOutcome::Amended))
    }

    /// Steps a ticket one position along the board flow, clamped at both
    /// ends.
    ///
    /// The store is written only when the status actually changes; clamped
    /// moves and moves on the `Future` side-state touch nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TicketLifecycleError::Store`] when the store cannot be
    /// reached.
    pub fn move_ticket(
        &self,
        ticket: &Ticket,
        direction: MoveDirection,
    ) -> TicketLifecycleResult<MoveOutcome> {
        let target = ticket.status().step(direction);
        if target == ticket.status() {
            return Ok(MoveOutcome::Unchanged);
        }
        let amended = self
            .store
            .amend(ticket.id(), TicketPatch::new().with_status(target))?;
        Ok(amended.map_or(MoveOutcome::Unchanged, MoveOutcome::Moved))
    }

    /// Returns every ticket in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TicketLifecycleError::Store`] when the store cannot be
    /// reached.
    pub fn tickets(&self) -> TicketLifecycleResult<Vec<Ticket>> {
        Ok(self.store.list()?)
    }
}
