//! Administrative service for the project → modules taxonomy.

use crate::taxonomy::{
    domain::{ModuleName, ProjectName, TaxonomyDomainError},
    ports::{TaxonomyStore, TaxonomyStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for taxonomy administration.
#[derive(Debug, Error)]
pub enum TaxonomyAdminError {
    /// Name validation failed.
    #[error(transparent)]
    Domain(#[from] TaxonomyDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaxonomyStoreError),
}

/// Result type for taxonomy admin service operations.
pub type TaxonomyAdminResult<T> = Result<T, TaxonomyAdminError>;

/// Taxonomy administration service over raw form input.
#[derive(Clone)]
pub struct TaxonomyAdminService<S>
where
    S: TaxonomyStore,
{
    store: Arc<S>,
}

impl<S> TaxonomyAdminService<S>
where
    S: TaxonomyStore,
{
    /// Creates a new taxonomy admin service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Registers a project; a duplicate name is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyAdminError`] when the name fails validation or the
    /// store cannot be reached.
    pub fn add_project(&self, name: &str) -> TaxonomyAdminResult<()> {
        let project = ProjectName::new(name)?;
        Ok(self.store.add_project(&project)?)
    }

    /// Removes a project and its module list; tickets referencing the name
    /// are left orphaned.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyAdminError`] when the name fails validation or the
    /// store cannot be reached.
    pub fn delete_project(&self, name: &str) -> TaxonomyAdminResult<()> {
        let project = ProjectName::new(name)?;
        Ok(self.store.delete_project(&project)?)
    }

    /// Appends a module to a project's list; a duplicate name is a silent
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyAdminError`] when a name fails validation or the
    /// store cannot be reached.
    pub fn add_module(&self, project: &str, module: &str) -> TaxonomyAdminResult<()> {
        let project_name = ProjectName::new(project)?;
        let module_name = ModuleName::new(module)?;
        Ok(self.store.add_module(&project_name, &module_name)?)
    }

    /// Removes a module from that project's list only.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyAdminError`] when a name fails validation or the
    /// store cannot be reached.
    pub fn delete_module(&self, project: &str, module: &str) -> TaxonomyAdminResult<()> {
        let project_name = ProjectName::new(project)?;
        let module_name = ModuleName::new(module)?;
        Ok(self.store.delete_module(&project_name, &module_name)?)
    }

    /// Returns the project list in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyAdminError::Store`] when the store cannot be
    /// reached.
    pub fn projects(&self) -> TaxonomyAdminResult<Vec<ProjectName>> {
        Ok(self.store.projects()?)
    }

    /// Returns one project's module list in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyAdminError`] when the name fails validation or the
    /// store cannot be reached.
    pub fn modules_of(&self, project: &str) -> TaxonomyAdminResult<Vec<ModuleName>> {
        let project_name = ProjectName::new(project)?;
        Ok(self.store.modules_of(&project_name)?)
    }

    /// Returns the de-duplicated union of every project's module list.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyAdminError::Store`] when the store cannot be
    /// reached.
    pub fn all_modules(&self) -> TaxonomyAdminResult<Vec<ModuleName>> {
        Ok(self.store.all_modules()?)
    }
}
