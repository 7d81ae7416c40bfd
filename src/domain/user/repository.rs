//! User repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;

use super::entity::{NewUser, User, UserStatus};
use crate::domain::DomainError;

/// Repository trait for the user record store.
///
/// The five operations the rest of the system consumes. Records are
/// insert-only; there is no update or delete.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Look up a user by email, used to enforce uniqueness before insert
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new record. Fails with `DomainError::Conflict` if the
    /// email already exists.
    async fn insert(&self, user: NewUser) -> Result<User, DomainError>;

    /// List records ordered by `created_at` descending, optionally
    /// filtered by status. Returns an empty vec when nothing matches.
    async fn list(&self, status: Option<UserStatus>) -> Result<Vec<User>, DomainError>;

    /// Count all records
    async fn count_all(&self) -> Result<u64, DomainError>;

    /// Count records with `created_at >= since` (boundary included)
    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
