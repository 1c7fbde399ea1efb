//! Administrative service for the assignable-user directory.

use crate::directory::{
    domain::{DirectoryDomainError, ParseUserRoleError, UserId, UserName, UserProfile, UserRole},
    ports::{UserDirectory, UserDirectoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for directory administration.
#[derive(Debug, Error)]
pub enum DirectoryAdminError {
    /// Name or identifier validation failed.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),
    /// Role parsing failed.
    #[error(transparent)]
    Role(#[from] ParseUserRoleError),
    /// Roster operation failed.
    #[error(transparent)]
    Roster(#[from] UserDirectoryError),
}

/// Result type for directory admin service operations.
pub type DirectoryAdminResult<T> = Result<T, DirectoryAdminError>;

/// Directory administration service over raw form input.
#[derive(Clone)]
pub struct DirectoryAdminService<D, C>
where
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    roster: Arc<D>,
    clock: Arc<C>,
}

impl<D, C> DirectoryAdminService<D, C>
where
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new directory admin service.
    #[must_use]
    pub const fn new(roster: Arc<D>, clock: Arc<C>) -> Self {
        Self { roster, clock }
    }

    /// Registers a user with a timestamp-derived identifier.
    ///
    /// Names are intentionally not checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryAdminError`] when the name or role fails
    /// validation or the roster cannot be reached.
    pub fn register(&self, name: &str, role: &str) -> DirectoryAdminResult<UserProfile> {
        let user_name = UserName::new(name)?;
        let user_role = UserRole::try_from(role)?;
        let profile = UserProfile::new(UserId::issued_by(&*self.clock), user_name, user_role);
        self.roster.add(profile.clone())?;
        Ok(profile)
    }

    /// Removes the user with the matching identifier; a no-op when none
    /// matches. Tickets assigned to the removed user keep the stored name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryAdminError::Roster`] when the roster cannot be
    /// reached.
    pub fn remove(&self, id: &UserId) -> DirectoryAdminResult<()> {
        Ok(self.roster.remove(id)?)
    }

    /// Returns every profile in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryAdminError::Roster`] when the roster cannot be
    /// reached.
    pub fn users(&self) -> DirectoryAdminResult<Vec<UserProfile>> {
        Ok(self.roster.list()?)
    }
}
