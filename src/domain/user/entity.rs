//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Error for status strings outside the two allowed values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status: '{0}'. Must be \"active\" or \"inactive\"")]
pub struct InvalidStatus(pub String);

impl std::str::FromStr for UserStatus {
    type Err = InvalidStatus;

    // Case-sensitive on purpose: "Active" is rejected, not normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted user record.
///
/// Records are immutable after creation: no update or delete operations
/// exist in this system, and `created_at` is assigned once by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for inserting a new user record.
///
/// The id is assigned by the store. `created_at` is stamped here, never
/// taken from the API client.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, status: UserStatus) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            status,
            created_at: Utc::now(),
        }
    }

    /// Override the creation timestamp. Used by the fixture seeder; the
    /// API path always keeps the `new` stamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
