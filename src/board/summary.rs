//! Status summary counts for the board overview widget.

use crate::ticket::domain::{Status, Ticket};
use serde::{Deserialize, Serialize};

/// One count per board status, tallied over the *unfiltered* collection.
///
/// The overview widget is intentionally not filter-reactive; it always shows
/// the whole board. `Future` tickets are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    /// Tickets awaiting work.
    pub pending: usize,
    /// Tickets in development.
    pub in_progress: usize,
    /// Tickets under verification.
    pub testing: usize,
    /// Completed tickets.
    pub done: usize,
}

impl StatusSummary {
    /// Tallies the summary over the full ticket collection.
    #[must_use]
    pub fn tally(tickets: &[Ticket]) -> Self {
        tickets
            .iter()
            .fold(Self::default(), |summary, ticket| summary.count(ticket.status()))
    }

    /// Returns the number of counted tickets.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending + self.in_progress + self.testing + self.done
    }

    const fn count(mut self, status: Status) -> Self {
        match status {
            Status::Pending => self.pending += 1,
            Status::InProgress => self.in_progress += 1,
            Status::Testing => self.testing += 1,
            Status::Done => self.done += 1,
            Status::Future => {}
        }
        self
    }
}
