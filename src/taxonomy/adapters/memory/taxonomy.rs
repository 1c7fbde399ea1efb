//! In-memory project → modules hierarchy.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::taxonomy::{
    domain::{ModuleName, ProjectName},
    ports::{TaxonomyStore, TaxonomyStoreError, TaxonomyStoreResult},
};

/// Thread-safe in-memory taxonomy store.
///
/// Projects and per-project module lists keep registration order. The
/// module lists are held separately from the project list: adding a module
/// under an unregistered project records the list under that key without
/// registering the project, mirroring the tracker's admin behaviour.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaxonomyStore {
    state: Arc<RwLock<TaxonomyState>>,
}

#[derive(Debug, Default)]
struct TaxonomyState {
    projects: Vec<ProjectName>,
    module_lists: Vec<ModuleList>,
}

#[derive(Debug)]
struct ModuleList {
    project: ProjectName,
    modules: Vec<ModuleName>,
}

impl InMemoryTaxonomyStore {
    /// Creates an empty in-memory taxonomy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a taxonomy pre-loaded with projects and their module lists.
    #[must_use]
    pub fn seeded(
        projects: impl IntoIterator<Item = ProjectName>,
        module_lists: impl IntoIterator<Item = (ProjectName, Vec<ModuleName>)>,
    ) -> Self {
        let state = TaxonomyState {
            projects: projects.into_iter().collect(),
            module_lists: module_lists
                .into_iter()
                .map(|(project, modules)| ModuleList { project, modules })
                .collect(),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    fn read(&self) -> TaxonomyStoreResult<std::sync::RwLockReadGuard<'_, TaxonomyState>> {
        self.state
            .read()
            .map_err(|err| TaxonomyStoreError::access(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaxonomyStoreResult<std::sync::RwLockWriteGuard<'_, TaxonomyState>> {
        self.state
            .write()
            .map_err(|err| TaxonomyStoreError::access(std::io::Error::other(err.to_string())))
    }
}

impl TaxonomyStore for InMemoryTaxonomyStore {
    fn add_project(&self, name: &ProjectName) -> TaxonomyStoreResult<()> {
        let mut state = self.write()?;
        if state.projects.contains(name) {
            return Ok(());
        }
        state.projects.push(name.clone());
        if !state.module_lists.iter().any(|list| list.project == *name) {
            state.module_lists.push(ModuleList {
                project: name.clone(),
                modules: Vec::new(),
            });
        }
        Ok(())
    }

    fn delete_project(&self, name: &ProjectName) -> TaxonomyStoreResult<()> {
        let mut state = self.write()?;
        state.projects.retain(|project| project != name);
        state.module_lists.retain(|list| list.project != *name);
        Ok(())
    }

    fn add_module(&self, project: &ProjectName, module: &ModuleName) -> TaxonomyStoreResult<()> {
        let mut state = self.write()?;
        if let Some(list) = state
            .module_lists
            .iter_mut()
            .find(|list| list.project == *project)
        {
            if !list.modules.contains(module) {
                list.modules.push(module.clone());
            }
            return Ok(());
        }
        state.module_lists.push(ModuleList {
            project: project.clone(),
            modules: vec![module.clone()],
        });
        Ok(())
    }

    fn delete_module(&self, project: &ProjectName, module: &ModuleName) -> TaxonomyStoreResult<()> {
        let mut state = self.write()?;
        if let Some(list) = state
            .module_lists
            .iter_mut()
            .find(|list| list.project == *project)
        {
            list.modules.retain(|name| name != module);
        }
        Ok(())
    }

    fn projects(&self) -> TaxonomyStoreResult<Vec<ProjectName>> {
        let state = self.read()?;
        Ok(state.projects.clone())
    }

    fn modules_of(&self, project: &ProjectName) -> TaxonomyStoreResult<Vec<ModuleName>> {
        let state = self.read()?;
        let modules = state
            .module_lists
            .iter()
            .find(|list| list.project == *project)
            .map(|list| list.modules.clone())
            .unwrap_or_default();
        Ok(modules)
    }

    fn all_modules(&self) -> TaxonomyStoreResult<Vec<ModuleName>> {
        let state = self.read()?;
        let mut seen: HashSet<ModuleName> = HashSet::new();
        let mut union = Vec::new();
        for list in &state.module_lists {
            for module in &list.modules {
                if seen.insert(module.clone()) {
                    union.push(module.clone());
                }
            }
        }
        Ok(union)
    }
}
