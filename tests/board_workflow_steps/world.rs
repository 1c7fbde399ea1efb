//! Shared world state for board workflow BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use munitrack::ticket::{
    adapters::memory::InMemoryTicketStore,
    domain::Ticket,
    services::{MoveOutcome, TicketLifecycleService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestLifecycleService = TicketLifecycleService<InMemoryTicketStore, DefaultClock>;

/// Scenario world for board workflow behaviour tests.
pub struct BoardWorld {
    /// The lifecycle service under test.
    pub service: TestLifecycleService,
    /// The most recently created ticket.
    pub last_created: Option<Ticket>,
    /// The ticket the move steps act on, kept current after each move.
    pub current: Option<Ticket>,
    /// Outcome of the last move.
    pub last_move: Option<MoveOutcome>,
}

impl BoardWorld {
    /// Creates a world over an empty in-memory board.
    #[must_use]
    pub fn new() -> Self {
        let service = TicketLifecycleService::new(
            Arc::new(InMemoryTicketStore::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            last_created: None,
            current: None,
            last_move: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
