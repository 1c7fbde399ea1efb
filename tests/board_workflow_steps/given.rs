//! Given steps for board workflow BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use munitrack::ticket::services::CreateTicketRequest;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn an_empty_board(world: &mut BoardWorld) {
    let _ = world;
}

#[given(r#"a pending ticket titled "{title}""#)]
fn a_pending_ticket(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let created = world
        .service
        .create(CreateTicketRequest::new("Cem-Muni9", "General", title))
        .wrap_err("create pending ticket for scenario")?;
    world.current = Some(created.clone());
    world.last_created = Some(created);
    Ok(())
}
