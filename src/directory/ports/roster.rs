//! Roster port for the assignable-user directory.

use crate::directory::domain::{UserId, UserProfile};
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Assignable-user roster contract.
///
/// Names are not unique; removal never cascades into the ticket collection.
pub trait UserDirectory: Send + Sync {
    /// Appends a profile. No uniqueness check is applied to names.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Access`] when the roster cannot be
    /// reached.
    fn add(&self, profile: UserProfile) -> UserDirectoryResult<()>;

    /// Removes the profile with the matching identifier; a no-op when none
    /// matches. Tickets assigned to the removed user keep the stored name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Access`] when the roster cannot be
    /// reached.
    fn remove(&self, id: &UserId) -> UserDirectoryResult<()>;

    /// Returns every profile in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Access`] when the roster cannot be
    /// reached.
    fn list(&self) -> UserDirectoryResult<Vec<UserProfile>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// The underlying roster could not be accessed.
    #[error("store access error: {0}")]
    Access(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps an infrastructure access error.
    pub fn access(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Access(Arc::new(err))
    }
}
