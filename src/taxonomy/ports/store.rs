//! Store port for the project → modules hierarchy.

use crate::taxonomy::domain::{ModuleName, ProjectName};
use std::sync::Arc;
use thiserror::Error;

/// Result type for taxonomy store operations.
pub type TaxonomyStoreResult<T> = Result<T, TaxonomyStoreError>;

/// Taxonomy contract.
///
/// Duplicate adds are silent no-ops, deletes over unknown names are no-ops,
/// and deletions never cascade into the ticket collection: tickets keep the
/// deleted name as a dangling reference.
pub trait TaxonomyStore: Send + Sync {
    /// Registers a project with an empty module list.
    ///
    /// A name already present is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyStoreError::Access`] when the hierarchy cannot be
    /// reached.
    fn add_project(&self, name: &ProjectName) -> TaxonomyStoreResult<()>;

    /// Removes a project and its module list entirely.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyStoreError::Access`] when the hierarchy cannot be
    /// reached.
    fn delete_project(&self, name: &ProjectName) -> TaxonomyStoreResult<()>;

    /// Appends a module to a project's list.
    ///
    /// A name already in that list is left untouched. Adding under a project
    /// absent from the project list still records the list under that key.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyStoreError::Access`] when the hierarchy cannot be
    /// reached.
    fn add_module(&self, project: &ProjectName, module: &ModuleName) -> TaxonomyStoreResult<()>;

    /// Removes a module from that project's list only.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyStoreError::Access`] when the hierarchy cannot be
    /// reached.
    fn delete_module(&self, project: &ProjectName, module: &ModuleName) -> TaxonomyStoreResult<()>;

    /// Returns the project list in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyStoreError::Access`] when the hierarchy cannot be
    /// reached.
    fn projects(&self) -> TaxonomyStoreResult<Vec<ProjectName>>;

    /// Returns one project's module list in registration order.
    ///
    /// An unknown project yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyStoreError::Access`] when the hierarchy cannot be
    /// reached.
    fn modules_of(&self, project: &ProjectName) -> TaxonomyStoreResult<Vec<ModuleName>>;

    /// Returns the de-duplicated union of every project's module list, in
    /// first-seen order. Populates the global module filter control.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyStoreError::Access`] when the hierarchy cannot be
    /// reached.
    fn all_modules(&self) -> TaxonomyStoreResult<Vec<ModuleName>>;
}

/// Errors returned by taxonomy store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaxonomyStoreError {
    /// The underlying hierarchy could not be accessed.
    #[error("store access error: {0}")]
    Access(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaxonomyStoreError {
    /// Wraps an infrastructure access error.
    pub fn access(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Access(Arc::new(err))
    }
}
