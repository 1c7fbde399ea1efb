//! User profile aggregate and role classification.

use super::{ParseUserRoleError, UserId, UserName};
use serde::{Deserialize, Serialize};

/// Role of a directory user within the development team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Writes and ships the code.
    Developer,
    /// Verifies behaviour against municipal operations.
    Functional,
}

impl UserRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Functional => "functional",
        }
    }

    /// Returns the product's display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Developer => "Desarrollador",
            Self::Functional => "Funcional",
        }
    }
}

impl TryFrom<&str> for UserRole {
    type Error = ParseUserRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "developer" => Ok(Self::Developer),
            "functional" => Ok(Self::Functional),
            _ => Err(ParseUserRoleError(value.to_owned())),
        }
    }
}

/// Assignable user: identifier, display name, and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    name: UserName,
    role: UserRole,
}

impl UserProfile {
    /// Creates a user profile.
    #[must_use]
    pub const fn new(id: UserId, name: UserName, role: UserRole) -> Self {
        Self { id, name, role }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }
}
