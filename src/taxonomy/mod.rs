//! Project → modules taxonomy for Munitrack.
//!
//! The taxonomy classifies tickets without enforcing referential integrity:
//! project and module names act as soft keys, duplicate adds are silent
//! no-ops, and deletions orphan any ticket still carrying the name. The
//! module follows hexagonal architecture:
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
