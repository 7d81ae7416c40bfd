//! In-memory user repository implementation

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserRepository, UserStatus};
use crate::domain::DomainError;

/// In-memory implementation of `UserRepository`.
///
/// Backs unit tests and local development without PostgreSQL. Ids are
/// assigned from a monotonic counter, matching the store contract of a
/// stable ordering key.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                user.email
            )));
        }

        let record = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: user.name,
            email: user.email,
            status: user.status,
            created_at: user.created_at,
        };

        users.push(record.clone());
        Ok(record)
    }

    async fn list(&self, status: Option<UserStatus>) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users
            .iter()
            .filter(|u| status.is_none_or(|s| u.status == s))
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.len() as u64)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| u.created_at >= since).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_user(name: &str, email: &str, status: UserStatus, days_ago: i64) -> NewUser {
        NewUser::new(name, email, status).with_created_at(Utc::now() - Duration::days(days_ago))
    }

    #[tokio::test]
    async fn test_insert_and_find_by_email() {
        let repo = InMemoryUserRepository::new();

        let created = repo
            .insert(NewUser::new(
                "John Smith",
                "john.smith@example.com",
                UserStatus::Active,
            ))
            .await
            .unwrap();

        assert_eq!(created.id, 1);

        let found = repo.find_by_email("john.smith@example.com").await.unwrap();
        assert_eq!(found, Some(created));

        let missing = repo.find_by_email("nobody@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let repo = InMemoryUserRepository::new();

        let first = repo
            .insert(NewUser::new("A", "a@example.com", UserStatus::Active))
            .await
            .unwrap();
        let second = repo
            .insert(NewUser::new("B", "b@example.com", UserStatus::Active))
            .await
            .unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = InMemoryUserRepository::new();

        repo.insert(NewUser::new("A", "dup@example.com", UserStatus::Active))
            .await
            .unwrap();

        let result = repo
            .insert(NewUser::new("B", "dup@example.com", UserStatus::Inactive))
            .await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));

        // First record remains unchanged
        let found = repo.find_by_email("dup@example.com").await.unwrap().unwrap();
        assert_eq!(found.name, "A");
        assert_eq!(repo.count_all().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let repo = InMemoryUserRepository::new();

        repo.insert(new_user("Old", "old@example.com", UserStatus::Active, 10))
            .await
            .unwrap();
        repo.insert(new_user("New", "new@example.com", UserStatus::Active, 1))
            .await
            .unwrap();
        repo.insert(new_user("Mid", "mid@example.com", UserStatus::Inactive, 5))
            .await
            .unwrap();

        let users = repo.list(None).await.unwrap();

        assert_eq!(users.len(), 3);
        assert!(users.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(users[0].name, "New");
        assert_eq!(users[2].name, "Old");
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let repo = InMemoryUserRepository::new();

        repo.insert(new_user("A", "a@example.com", UserStatus::Active, 1))
            .await
            .unwrap();
        repo.insert(new_user("B", "b@example.com", UserStatus::Inactive, 2))
            .await
            .unwrap();
        repo.insert(new_user("C", "c@example.com", UserStatus::Active, 3))
            .await
            .unwrap();

        let active = repo.list(Some(UserStatus::Active)).await.unwrap();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|u| u.status == UserStatus::Active));

        let all = repo.list(None).await.unwrap();
        assert!(active.iter().all(|u| all.contains(u)));
    }

    #[tokio::test]
    async fn test_list_empty_store_returns_empty_vec() {
        let repo = InMemoryUserRepository::new();

        assert!(repo.list(None).await.unwrap().is_empty());
        assert!(repo.list(Some(UserStatus::Active)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_count_created_since_includes_boundary() {
        let repo = InMemoryUserRepository::new();
        let boundary = Utc::now() - Duration::days(15);

        repo.insert(
            NewUser::new("Boundary", "boundary@example.com", UserStatus::Active)
                .with_created_at(boundary),
        )
        .await
        .unwrap();
        repo.insert(
            NewUser::new("Older", "older@example.com", UserStatus::Active)
                .with_created_at(boundary - Duration::seconds(1)),
        )
        .await
        .unwrap();

        assert_eq!(repo.count_created_since(boundary).await.unwrap(), 1);
        assert_eq!(repo.count_all().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_email_exists() {
        let repo = InMemoryUserRepository::new();

        repo.insert(NewUser::new("A", "a@example.com", UserStatus::Active))
            .await
            .unwrap();

        assert!(repo.email_exists("a@example.com").await.unwrap());
        assert!(!repo.email_exists("b@example.com").await.unwrap());
    }
}
