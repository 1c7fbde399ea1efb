//! Ticket aggregate root, creation draft, and amendment patch.

use super::{LegacyId, Priority, ReportedOn, Status, TicketDomainError, TicketId};
use crate::directory::domain::UserName;
use crate::taxonomy::domain::{ModuleName, ProjectName};
use serde::{Deserialize, Serialize};

/// Ticket aggregate root.
///
/// `project`, `module`, and `assignee` are soft references: deleting the
/// referenced taxonomy entry or user leaves the stored value dangling, which
/// is valid by design. Tickets are never hard-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    legacy_id: Option<LegacyId>,
    project: ProjectName,
    module: ModuleName,
    title: String,
    description: String,
    priority: Priority,
    status: Status,
    assignee: Option<UserName>,
    reported_on: ReportedOn,
}

/// Caller-supplied fields for a new ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    project: ProjectName,
    module: ModuleName,
    title: String,
    description: String,
    priority: Priority,
    status: Status,
    assignee: Option<UserName>,
}

impl TicketDraft {
    /// Creates a draft with the creation form's defaults (medium priority,
    /// pending status, no assignee).
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        project: ProjectName,
        module: ModuleName,
        title: impl Into<String>,
    ) -> Result<Self, TicketDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TicketDomainError::EmptyTitle);
        }
        Ok(Self {
            project,
            module,
            title: trimmed.to_owned(),
            description: String::new(),
            priority: Priority::Medium,
            status: Status::Pending,
            assignee: None,
        })
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

    /// Assigns a user by name.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserName) -> Self {
        self.assignee = Some(assignee);
        self
    }
}

/// Partial amendment merged into an existing ticket.
///
/// Unset fields are left untouched; the assignee can be overwritten or
/// cleared explicitly. No field is validated on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketPatch {
    project: Option<ProjectName>,
    module: Option<ModuleName>,
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
    assignee: Option<Option<UserName>>,
}

impl TicketPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the project reference.
    #[must_use]
    pub fn with_project(mut self, project: ProjectName) -> Self {
        self.project = Some(project);
        self
    }

    /// Overwrites the module reference.
    #[must_use]
    pub fn with_module(mut self, module: ModuleName) -> Self {
        self.module = Some(module);
        self
    }

    /// Overwrites the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overwrites the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overwrites the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Overwrites the status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Overwrites the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserName) -> Self {
        self.assignee = Some(Some(assignee));
        self
    }

    /// Clears the assignee.
    #[must_use]
    pub fn clearing_assignee(mut self) -> Self {
        self.assignee = Some(None);
        self
    }

    /// Returns `true` when the patch carries no changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.project.is_none()
            && self.module.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.assignee.is_none()
    }
}

/// Parameter object for the legacy-import boundary.
///
/// Records arrive fully specified, including the token and raw date string
/// the previous tracker stored; the date is normalized through
/// [`ReportedOn::parse_legacy`] on import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedTicketRecord {
    /// Token assigned by the previous tracker.
    pub id: TicketId,
    /// Numeric legacy ticket number, if any.
    pub legacy_id: Option<LegacyId>,
    /// Project reference.
    pub project: ProjectName,
    /// Module reference.
    pub module: ModuleName,
    /// Ticket title.
    pub title: String,
    /// Ticket description.
    pub description: String,
    /// Priority.
    pub priority: Priority,
    /// Workflow state.
    pub status: Status,
    /// Assignee, if any.
    pub assignee: Option<UserName>,
    /// Raw reporting-date token as stored by the previous tracker.
    pub reported_raw: String,
}

impl Ticket {
    /// Creates a ticket from a draft, with the identifier and reporting date
    /// assigned at creation time.
    #[must_use]
    pub fn new(id: TicketId, draft: TicketDraft, reported_on: ReportedOn) -> Self {
        Self {
            id,
            legacy_id: None,
            project: draft.project,
            module: draft.module,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: draft.status,
            assignee: draft.assignee,
            reported_on,
        }
    }

    /// Reconstructs a ticket from a legacy-import record.
    #[must_use]
    pub fn from_imported(record: ImportedTicketRecord) -> Self {
        let reported_on = ReportedOn::parse_legacy(&record.reported_raw);
        Self {
            id: record.id,
            legacy_id: record.legacy_id,
            project: record.project,
            module: record.module,
            title: record.title,
            description: record.description,
            priority: record.priority,
            status: record.status,
            assignee: record.assignee,
            reported_on,
        }
    }

    /// Returns the ticket identifier.
    #[must_use]
    pub const fn id(&self) -> &TicketId {
        &self.id
    }

    /// Returns the legacy ticket number, if any.
    #[must_use]
    pub const fn legacy_id(&self) -> Option<LegacyId> {
        self.legacy_id
    }

    /// Returns the project reference.
    #[must_use]
    pub const fn project(&self) -> &ProjectName {
        &self.project
    }

    /// Returns the module reference.
    #[must_use]
    pub const fn module(&self) -> &ModuleName {
        &self.module
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the workflow state.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&UserName> {
        self.assignee.as_ref()
    }

    /// Returns the normalized reporting date.
    #[must_use]
    pub const fn reported_on(&self) -> &ReportedOn {
        &self.reported_on
    }

    /// Merges a patch into this ticket; unset fields are untouched.
    pub fn apply(&mut self, patch: TicketPatch) {
        if let Some(project) = patch.project {
            self.project = project;
        }
        if let Some(module) = patch.module {
            self.module = module;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
    }
}
