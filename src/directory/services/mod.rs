//! Orchestration services for the directory context.

mod admin;

pub use admin::{DirectoryAdminError, DirectoryAdminResult, DirectoryAdminService};
