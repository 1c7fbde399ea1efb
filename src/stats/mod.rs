//! Monthly statistics for Munitrack.
//!
//! A pure, restartable aggregation of the ticket collection into calendar
//! month buckets, backing the workload-over-time chart at the rendering
//! boundary.

mod monthly;

pub use monthly::{MonthlyRow, UNKNOWN_BUCKET_LABEL, monthly_activity};

#[cfg(test)]
mod tests;
