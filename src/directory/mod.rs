//! Assignable-user directory for Munitrack.
//!
//! Users carry a display name and a team role. Tickets reference users by
//! name only, so removing a user never touches the ticket collection — the
//! stored name keeps rendering as-is. The module follows hexagonal
//! architecture:
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
