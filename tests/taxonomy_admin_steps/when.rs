//! When steps for taxonomy administration BDD scenarios.

use super::world::TaxonomyWorld;
use rstest_bdd_macros::when;

#[when(r#"the project "{name}" is registered"#)]
fn the_project_is_registered(world: &mut TaxonomyWorld, name: String) -> Result<(), eyre::Report> {
    world
        .admin
        .add_project(&name)
        .map_err(|err| eyre::eyre!("project registration failed: {err}"))
}

#[when(r#"the project "{name}" is deleted"#)]
fn the_project_is_deleted(world: &mut TaxonomyWorld, name: String) -> Result<(), eyre::Report> {
    world
        .admin
        .delete_project(&name)
        .map_err(|err| eyre::eyre!("project deletion failed: {err}"))
}

#[when(r#"the module "{module}" is added to "{project}""#)]
fn the_module_is_added(
    world: &mut TaxonomyWorld,
    module: String,
    project: String,
) -> Result<(), eyre::Report> {
    world
        .admin
        .add_module(&project, &module)
        .map_err(|err| eyre::eyre!("module registration failed: {err}"))
}

#[when(r#"the module "{module}" is removed from "{project}""#)]
fn the_module_is_removed(
    world: &mut TaxonomyWorld,
    module: String,
    project: String,
) -> Result<(), eyre::Report> {
    world
        .admin
        .delete_module(&project, &module)
        .map_err(|err| eyre::eyre!("module removal failed: {err}"))
}
