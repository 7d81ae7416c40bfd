//! User service for record creation and listing

use std::sync::Arc;

use crate::domain::user::{validate_new_user, NewUser, User, UserRepository, UserStatus};
use crate::domain::DomainError;

/// Raw create-user input as received from the transport layer.
///
/// Every field is optional here; validation decides what is acceptable.
#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

/// User service for creating and listing records
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user record.
    ///
    /// Validates the input, pre-checks email uniqueness, then inserts
    /// with a server-assigned `created_at`. The store enforces the
    /// unique index as well, so a race between the pre-check and the
    /// insert still surfaces as a conflict.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let validated = validate_new_user(
            request.name.as_deref(),
            request.email.as_deref(),
            request.status.as_deref(),
        )
        .map_err(DomainError::validation)?;

        if self.repository.email_exists(&validated.email).await? {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                validated.email
            )));
        }

        let user = NewUser::new(validated.name, validated.email, validated.status);

        self.repository.insert(user).await
    }

    /// List users newest-first, optionally filtered by status
    pub async fn list(&self, status: Option<UserStatus>) -> Result<Vec<User>, DomainError> {
        self.repository.list(status).await
    }

    /// Count users in the store
    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::repository::InMemoryUserRepository;
    use chrono::Utc;

    fn create_service() -> UserService<InMemoryUserRepository> {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn make_request(name: &str, email: &str, status: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            status: Some(status.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let service = create_service();

        let before = Utc::now();
        let user = service
            .create(make_request("John Smith", "john.smith@example.com", "active"))
            .await
            .unwrap();

        assert_eq!(user.name, "John Smith");
        assert_eq!(user.email, "john.smith@example.com");
        assert_eq!(user.status, UserStatus::Active);
        // created_at is server-assigned, never client-supplied
        assert!(user.created_at >= before && user.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_create_user_missing_fields() {
        let service = create_service();

        let result = service.create(CreateUserRequest::default()).await;

        match result {
            Err(DomainError::Validation { errors }) => {
                assert_eq!(errors.len(), 3);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_user_invalid_status() {
        let service = create_service();

        let result = service
            .create(make_request("John", "john@example.com", "pending"))
            .await;

        match result {
            Err(DomainError::Validation { errors }) => {
                assert!(errors.get("status").is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_email_is_conflict() {
        let service = create_service();

        service
            .create(make_request("John", "dup@example.com", "active"))
            .await
            .unwrap();

        let result = service
            .create(make_request("Jane", "dup@example.com", "inactive"))
            .await;

        // Conflict, not a validation failure
        assert!(matches!(result, Err(DomainError::Conflict { .. })));

        let users = service.list(None).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "John");
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let service = create_service();

        service
            .create(make_request("A", "a@example.com", "active"))
            .await
            .unwrap();
        service
            .create(make_request("B", "b@example.com", "inactive"))
            .await
            .unwrap();

        let all = service.list(None).await.unwrap();
        assert_eq!(all.len(), 2);

        let active = service.list(Some(UserStatus::Active)).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].email, "a@example.com");
    }

    #[tokio::test]
    async fn test_count() {
        let service = create_service();

        assert_eq!(service.count().await.unwrap(), 0);

        service
            .create(make_request("A", "a@example.com", "active"))
            .await
            .unwrap();

        assert_eq!(service.count().await.unwrap(), 1);
    }
}
