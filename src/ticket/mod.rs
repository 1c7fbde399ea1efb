//! Ticket lifecycle management for Munitrack.
//!
//! Tickets are created with a sequential token and a normalized reporting
//! date, amended in place, and stepped along the fixed board flow with
//! clamping at both ends. Tickets are never hard-deleted; dangling project,
//! module, and assignee references are valid by design. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
