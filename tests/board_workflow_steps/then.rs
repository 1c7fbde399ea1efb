//! Then steps for board workflow BDD scenarios.

use super::world::BoardWorld;
use munitrack::ticket::domain::Status;
use munitrack::ticket::services::MoveOutcome;
use rstest_bdd_macros::then;

#[then(r#"the new ticket carries token "{token}""#)]
fn new_ticket_carries_token(world: &BoardWorld, token: String) -> Result<(), eyre::Report> {
    let created = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no created ticket in scenario world"))?;
    if created.id().as_str() != token {
        return Err(eyre::eyre!(
            "expected token '{token}', got '{}'",
            created.id()
        ));
    }
    Ok(())
}

#[then("the board lists {count:usize} tickets")]
fn board_lists_tickets(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let tickets = world
        .service
        .tickets()
        .map_err(|err| eyre::eyre!("ticket listing failed: {err}"))?;
    if tickets.len() != count {
        return Err(eyre::eyre!("expected {count} tickets, found {}", tickets.len()));
    }
    Ok(())
}

#[then(r#"the ticket sits in status "{status}""#)]
fn ticket_sits_in_status(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = Status::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("unknown status in scenario: {err}"))?;
    let current = world
        .current
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no ticket in scenario world"))?;
    let stored = world
        .service
        .tickets()
        .map_err(|err| eyre::eyre!("ticket listing failed: {err}"))?
        .into_iter()
        .find(|ticket| ticket.id() == current.id())
        .ok_or_else(|| eyre::eyre!("scenario ticket vanished from the store"))?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected:?}, got {:?}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("the move leaves the board unchanged")]
fn move_leaves_board_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    if matches!(world.last_move, Some(MoveOutcome::Unchanged)) {
        return Ok(());
    }
    Err(eyre::eyre!(
        "expected an unchanged move, got {:?}",
        world.last_move
    ))
}
