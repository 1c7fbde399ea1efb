//! When steps for board workflow BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use munitrack::ticket::domain::MoveDirection;
use munitrack::ticket::services::{CreateTicketRequest, MoveOutcome};
use rstest_bdd_macros::when;

#[when(r#"a ticket titled "{title}" is created under project "{project}" and module "{module}""#)]
fn a_ticket_is_created(
    world: &mut BoardWorld,
    title: String,
    project: String,
    module: String,
) -> Result<(), eyre::Report> {
    let created = world
        .service
        .create(CreateTicketRequest::new(project, module, title))
        .wrap_err("create ticket for scenario")?;
    world.current = Some(created.clone());
    world.last_created = Some(created);
    Ok(())
}

#[when("the ticket is moved forward")]
fn the_ticket_is_moved_forward(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    move_once(world, MoveDirection::Forward)
}

#[when("the ticket is moved back")]
fn the_ticket_is_moved_back(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    move_once(world, MoveDirection::Back)
}

#[when("the ticket is moved forward {count:usize} times")]
fn the_ticket_is_moved_forward_times(
    world: &mut BoardWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    for _ in 0..count {
        move_once(world, MoveDirection::Forward)?;
    }
    Ok(())
}

fn move_once(world: &mut BoardWorld, direction: MoveDirection) -> Result<(), eyre::Report> {
    let current = world
        .current
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no ticket in scenario world"))?;
    let outcome = world
        .service
        .move_ticket(current, direction)
        .wrap_err("move ticket for scenario")?;
    if let MoveOutcome::Moved(moved) = &outcome {
        world.current = Some(moved.clone());
    }
    world.last_move = Some(outcome);
    Ok(())
}
