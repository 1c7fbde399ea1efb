//! Monthly activity aggregation over normalized reporting dates.

use crate::ticket::domain::{Status, Ticket};
use serde::Serialize;
use std::collections::BTreeMap;

/// Bucket label for tickets whose reporting date could not be normalized.
pub const UNKNOWN_BUCKET_LABEL: &str = "Desconocido";

/// Sort key of the unknown bucket; sorts ahead of any real month.
const UNKNOWN_SORT_KEY: i64 = 0;

/// One month bucket: per-status counts plus a total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRow {
    /// Canonical `Mon-YY` bucket label, or [`UNKNOWN_BUCKET_LABEL`].
    pub label: String,
    /// Chronological sort key (`year * 100 + month index`; 0 for unknown).
    pub sort_key: i64,
    /// Tickets awaiting work.
    pub pending: usize,
    /// Tickets in development.
    pub in_progress: usize,
    /// Tickets under verification.
    pub testing: usize,
    /// Completed tickets.
    pub done: usize,
    /// Deferred improvements.
    pub future: usize,
    /// All tickets in the bucket.
    pub total: usize,
}

impl MonthlyRow {
    fn empty(label: String, sort_key: i64) -> Self {
        Self {
            label,
            sort_key,
            pending: 0,
            in_progress: 0,
            testing: 0,
            done: 0,
            future: 0,
            total: 0,
        }
    }

    fn record(&mut self, status: Status) {
        match status {
            Status::Pending => self.pending += 1,
            Status::InProgress => self.in_progress += 1,
            Status::Testing => self.testing += 1,
            Status::Done => self.done += 1,
            Status::Future => self.future += 1,
        }
        self.total += 1;
    }
}

/// Groups tickets into month buckets, sorted ascending by sort key.
///
/// The bucket key comes from each ticket's normalized reporting date, so
/// full-precision and month-resolution dates of the same calendar month land
/// in the same bucket. Unnormalizable dates fall into the
/// [`UNKNOWN_BUCKET_LABEL`] bucket, which sorts first. The aggregation is
/// pure and order-independent; recompute it whenever the collection changes.
#[must_use]
pub fn monthly_activity(tickets: &[Ticket]) -> Vec<MonthlyRow> {
    let mut rows: BTreeMap<i64, MonthlyRow> = BTreeMap::new();
    for ticket in tickets {
        let (sort_key, label) = ticket.reported_on().month_key().map_or_else(
            || (UNKNOWN_SORT_KEY, UNKNOWN_BUCKET_LABEL.to_owned()),
            |key| (key.sort_key(), key.label()),
        );
        rows.entry(sort_key)
            .or_insert_with(|| MonthlyRow::empty(label, sort_key))
            .record(ticket.status());
    }
    rows.into_values().collect()
}
