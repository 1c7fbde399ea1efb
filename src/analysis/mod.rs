//! Backlog analysis for Munitrack.
//!
//! An optional LLM-backed summarizer over the open backlog. The analyzer is
//! an external collaborator behind a port: a remote generateContent adapter,
//! a canned local fallback for credential-less sessions, and a call-time
//! credential gate selecting between them. The session service keeps the
//! asynchronous round trip total — failures surface as a displayable string
//! — and fences overlapping requests by identifier. The module follows
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
