//! Error types for taxonomy domain validation.

use thiserror::Error;

/// Errors returned while constructing taxonomy values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaxonomyDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The module name is empty after trimming.
    #[error("module name must not be empty")]
    EmptyModuleName,
}
