//! In-memory roster of assignable users.

use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{UserId, UserProfile},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<Vec<UserProfile>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-loaded with profiles.
    #[must_use]
    pub fn seeded(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        Self {
            state: Arc::new(RwLock::new(profiles.into_iter().collect())),
        }
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn add(&self, profile: UserProfile) -> UserDirectoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| UserDirectoryError::access(std::io::Error::other(err.to_string())))?;
        state.push(profile);
        Ok(())
    }

    fn remove(&self, id: &UserId) -> UserDirectoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| UserDirectoryError::access(std::io::Error::other(err.to_string())))?;
        state.retain(|profile| profile.id() != id);
        Ok(())
    }

    fn list(&self) -> UserDirectoryResult<Vec<UserProfile>> {
        let state = self
            .state
            .read()
            .map_err(|err| UserDirectoryError::access(std::io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }
}
