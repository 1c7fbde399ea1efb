//! Derived board views for Munitrack.
//!
//! Everything here is a pure function of the current ticket collection and
//! the active filter selections: the filtered list, the four-column kanban
//! partition, and the unfiltered status summary. Nothing owns a cache; the
//! rendering boundary recomputes these on every state change.

mod columns;
mod filter;
mod summary;

pub use columns::{BoardColumn, board_columns};
pub use filter::{BoardFilter, Selection, filtered_list};
pub use summary::StatusSummary;

#[cfg(test)]
mod tests;
