//! Given steps for taxonomy administration BDD scenarios.

use super::world::TaxonomyWorld;
use rstest_bdd_macros::given;

#[given("an empty taxonomy")]
fn an_empty_taxonomy(world: &mut TaxonomyWorld) {
    let _ = world;
}

#[given("a board seeded with the demo dataset")]
fn a_seeded_board(world: &mut TaxonomyWorld) -> Result<(), eyre::Report> {
    world.load_demo()
}
