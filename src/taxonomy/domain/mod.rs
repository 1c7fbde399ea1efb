//! Domain model for the project → modules taxonomy.

mod error;
mod names;

pub use error::TaxonomyDomainError;
pub use names::{ModuleName, ProjectName};
