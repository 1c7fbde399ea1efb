//! Munitrack: incident-tracking core for municipal software teams.
//!
//! This crate provides the session-scoped state model behind a kanban/list
//! incident board: the ticket collection with its lifecycle operations,
//! administrative CRUD for projects, modules, and users, pure derived views
//! (filtering, kanban bucketing, summary counts, monthly statistics), and an
//! optional LLM-backed backlog summarizer.
//!
//! # Architecture
//!
//! Munitrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores, the
//!   remote analyzer)
//!
//! There is no persistence layer and no server: all state lives in memory
//! for the session, mutations are synchronous and atomic from the caller's
//! perspective, and the derived views are recomputed from scratch on every
//! change. Referential integrity is intentionally lax — tickets hold
//! project, module, and assignee names by value, and deleting the referenced
//! entry simply leaves the name dangling.
//!
//! # Modules
//!
//! - [`ticket`]: Ticket lifecycle — creation, amendment, board-flow moves
//! - [`taxonomy`]: Project → modules hierarchy
//! - [`directory`]: Assignable users
//! - [`board`]: Derived filter/kanban/summary views
//! - [`stats`]: Monthly activity aggregation
//! - [`analysis`]: Backlog analyzer port, adapters, and session service
//! - [`seed`]: Demo dataset from the previous tracker
//!
//! # Example
//!
//! ```
//! use munitrack::board::{BoardFilter, StatusSummary, board_columns, filtered_list};
//! use munitrack::ticket::adapters::memory::InMemoryTicketStore;
//! use munitrack::ticket::services::{CreateTicketRequest, TicketLifecycleService};
//! use mockable::DefaultClock;
//! use std::sync::Arc;
//!
//! let service = TicketLifecycleService::new(
//!     Arc::new(InMemoryTicketStore::new()),
//!     Arc::new(DefaultClock),
//! );
//! let ticket = service
//!     .create(CreateTicketRequest::new("Cem-Muni9", "Pagos", "Error PDF Consulta Pagos"))
//!     .expect("ticket creation");
//! assert_eq!(ticket.id().as_str(), "T-001");
//!
//! let tickets = service.tickets().expect("ticket listing");
//! let filter = BoardFilter::unfiltered();
//! let visible = filtered_list(&tickets, &filter);
//! let columns = board_columns(&visible);
//! assert_eq!(columns.len(), 4);
//! assert_eq!(StatusSummary::tally(&tickets).pending, 1);
//! ```

pub mod analysis;
pub mod board;
pub mod directory;
pub mod seed;
pub mod stats;
pub mod taxonomy;
pub mod ticket;
