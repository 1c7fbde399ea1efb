//! Behaviour tests for ticket creation and board-flow moves.

mod board_workflow_steps;

use board_workflow_steps::world::{BoardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/board_workflow.feature",
    name = "The first ticket on an empty board receives the first token"
)]
fn first_ticket_receives_first_token(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_workflow.feature",
    name = "Tokens follow the collection size"
)]
fn tokens_follow_collection_size(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_workflow.feature",
    name = "A ticket walks forward one column at a time"
)]
fn ticket_walks_forward(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_workflow.feature",
    name = "Moving forward from the last column changes nothing"
)]
fn forward_from_done_is_clamped(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_workflow.feature",
    name = "Moving back from the first column changes nothing"
)]
fn back_from_pending_is_clamped(world: BoardWorld) {
    let _ = world;
}
