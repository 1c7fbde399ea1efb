//! Orchestration services for the ticket context.

mod lifecycle;

pub use lifecycle::{
    AmendOutcome, CreateTicketRequest, MoveOutcome, TicketLifecycleError, TicketLifecycleResult,
    TicketLifecycleService,
};
