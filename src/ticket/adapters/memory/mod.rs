//! In-memory adapters for the ticket context.

mod tickets;

pub use tickets::InMemoryTicketStore;
