//! Port contracts for the taxonomy context.

mod store;

pub use store::{TaxonomyStore, TaxonomyStoreError, TaxonomyStoreResult};
