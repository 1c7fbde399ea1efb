//! Port contracts for the ticket context.

mod store;

pub use store::{TicketStore, TicketStoreError, TicketStoreResult};
