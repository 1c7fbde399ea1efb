//! Orchestration services for the taxonomy context.

mod admin;

pub use admin::{TaxonomyAdminError, TaxonomyAdminResult, TaxonomyAdminService};
