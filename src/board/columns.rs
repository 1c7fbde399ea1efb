//! Kanban partition of a filtered ticket list.

use crate::ticket::domain::{Status, Ticket};

/// One kanban column: a board-flow status and the tickets sitting in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn<'a> {
    /// The column's workflow state.
    pub status: Status,
    /// The column heading shown to users.
    pub title: &'static str,
    /// Tickets in this column, in input order.
    pub tickets: Vec<&'a Ticket>,
}

/// Partitions a filtered ticket list into the four fixed board columns.
///
/// Columns appear in workflow order. Tickets in the `Future` side-state are
/// excluded from the board entirely; they remain visible in the list view.
#[must_use]
pub fn board_columns<'a>(filtered: &[&'a Ticket]) -> Vec<BoardColumn<'a>> {
    Status::BOARD_FLOW
        .iter()
        .map(|status| BoardColumn {
            status: *status,
            title: status.label(),
            tickets: filtered
                .iter()
                .copied()
                .filter(|ticket| ticket.status() == *status)
                .collect(),
        })
        .collect()
}
