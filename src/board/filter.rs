//! Filter predicate over the ticket collection.

use crate::taxonomy::domain::{ModuleName, ProjectName};
use crate::ticket::domain::Ticket;
use serde::{Deserialize, Serialize};

/// A single filter control: everything, or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    /// No restriction.
    All,
    /// Only the given value passes.
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns `true` when the value passes this selection.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == value,
        }
    }
}

/// Active board filters: one project selection and one module selection.
///
/// The two predicates are evaluated independently; the module choices are
/// intentionally not narrowed to the selected project, allowing
/// cross-project module searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardFilter {
    project: Selection<ProjectName>,
    module: Selection<ModuleName>,
}

impl BoardFilter {
    /// Creates a filter from two selections.
    #[must_use]
    pub const fn new(project: Selection<ProjectName>, module: Selection<ModuleName>) -> Self {
        Self { project, module }
    }

    /// Creates a filter that admits every ticket.
    #[must_use]
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Restricts to one project.
    #[must_use]
    pub fn with_project(mut self, project: ProjectName) -> Self {
        self.project = Selection::Only(project);
        self
    }

    /// Restricts to one module.
    #[must_use]
    pub fn with_module(mut self, module: ModuleName) -> Self {
        self.module = Selection::Only(module);
        self
    }

    /// Returns the project selection.
    #[must_use]
    pub const fn project(&self) -> &Selection<ProjectName> {
        &self.project
    }

    /// Returns the module selection.
    #[must_use]
    pub const fn module(&self) -> &Selection<ModuleName> {
        &self.module
    }

    /// Returns `true` when the ticket passes both selections.
    #[must_use]
    pub fn accepts(&self, ticket: &Ticket) -> bool {
        self.module.admits(ticket.module()) && self.project.admits(ticket.project())
    }
}

/// Returns the tickets passing the filter, in input order.
///
/// Backs the tabular list view and feeds the kanban partition.
#[must_use]
pub fn filtered_list<'a>(tickets: &'a [Ticket], filter: &BoardFilter) -> Vec<&'a Ticket> {
    tickets.iter().filter(|ticket| filter.accepts(ticket)).collect()
}
