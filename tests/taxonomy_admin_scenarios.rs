//! Behaviour tests for project and module administration.

mod taxonomy_admin_steps;

use rstest_bdd_macros::scenario;
use taxonomy_admin_steps::world::{TaxonomyWorld, world};

#[scenario(
    path = "tests/features/taxonomy_admin.feature",
    name = "Registering the same project twice keeps one entry"
)]
fn duplicate_project_registration(world: TaxonomyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/taxonomy_admin.feature",
    name = "Deleting a project leaves its tickets orphaned"
)]
fn deleting_a_project_orphans_tickets(world: TaxonomyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/taxonomy_admin.feature",
    name = "The same module under two projects stays independent"
)]
fn module_lists_stay_independent(world: TaxonomyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/taxonomy_admin.feature",
    name = "The global module list de-duplicates across projects"
)]
fn global_module_list_dedups(world: TaxonomyWorld) {
    let _ = world;
}
