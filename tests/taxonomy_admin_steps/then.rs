//! Then steps for taxonomy administration BDD scenarios.

use super::world::TaxonomyWorld;
use munitrack::ticket::ports::TicketStore;
use rstest_bdd_macros::then;

#[then("the project list contains {count:usize} entries")]
fn project_list_contains(world: &TaxonomyWorld, count: usize) -> Result<(), eyre::Report> {
    let projects = world
        .admin
        .projects()
        .map_err(|err| eyre::eyre!("project listing failed: {err}"))?;
    if projects.len() != count {
        return Err(eyre::eyre!(
            "expected {count} projects, found {}",
            projects.len()
        ));
    }
    Ok(())
}

#[then(r#"the project list does not include "{name}""#)]
fn project_list_excludes(world: &TaxonomyWorld, name: String) -> Result<(), eyre::Report> {
    let projects = world
        .admin
        .projects()
        .map_err(|err| eyre::eyre!("project listing failed: {err}"))?;
    if projects.iter().any(|project| project.as_str() == name) {
        return Err(eyre::eyre!("expected project list to exclude '{name}'"));
    }
    Ok(())
}

#[then(r#"all {count:usize} tickets still reference "{name}""#)]
fn tickets_still_reference(
    world: &TaxonomyWorld,
    count: usize,
    name: String,
) -> Result<(), eyre::Report> {
    let tickets = world
        .tickets
        .list()
        .map_err(|err| eyre::eyre!("ticket listing failed: {err}"))?;
    if tickets.len() != count {
        return Err(eyre::eyre!("expected {count} tickets, found {}", tickets.len()));
    }
    if !tickets.iter().all(|ticket| ticket.project().as_str() == name) {
        return Err(eyre::eyre!("expected every ticket to reference '{name}'"));
    }
    Ok(())
}

#[then(r#"the module list of "{project}" is empty"#)]
fn module_list_is_empty(world: &TaxonomyWorld, project: String) -> Result<(), eyre::Report> {
    let modules = world
        .admin
        .modules_of(&project)
        .map_err(|err| eyre::eyre!("module listing failed: {err}"))?;
    if !modules.is_empty() {
        return Err(eyre::eyre!("expected no modules, found {modules:?}"));
    }
    Ok(())
}

#[then(r#"the module list of "{project}" contains "{module}""#)]
fn module_list_contains(
    world: &TaxonomyWorld,
    project: String,
    module: String,
) -> Result<(), eyre::Report> {
    let modules = world
        .admin
        .modules_of(&project)
        .map_err(|err| eyre::eyre!("module listing failed: {err}"))?;
    if !modules.iter().any(|name| name.as_str() == module) {
        return Err(eyre::eyre!(
            "expected module list of '{project}' to contain '{module}'"
        ));
    }
    Ok(())
}

#[then("the global module list contains {count:usize} entries")]
fn global_module_list_contains(world: &TaxonomyWorld, count: usize) -> Result<(), eyre::Report> {
    let modules = world
        .admin
        .all_modules()
        .map_err(|err| eyre::eyre!("module union failed: {err}"))?;
    if modules.len() != count {
        return Err(eyre::eyre!(
            "expected {count} modules in the union, found {}",
            modules.len()
        ));
    }
    Ok(())
}
