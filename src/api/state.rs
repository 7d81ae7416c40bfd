//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{User, UserAnalytics, UserRepository, UserStatus};
use crate::domain::DomainError;
use crate::infrastructure::user::{AnalyticsService, CreateUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch.
///
/// Handlers receive explicit store-backed handles through this state;
/// there is no ambient persistence context.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        analytics_service: Arc<dyn AnalyticsServiceTrait>,
    ) -> Self {
        Self {
            user_service,
            analytics_service,
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn list(&self, status: Option<UserStatus>) -> Result<Vec<User>, DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Trait for analytics computation
#[async_trait::async_trait]
pub trait AnalyticsServiceTrait: Send + Sync {
    async fn compute(&self) -> Result<UserAnalytics, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn list(&self, status: Option<UserStatus>) -> Result<Vec<User>, DomainError> {
        UserService::list(self, status).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        UserService::count(self).await
    }
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> AnalyticsServiceTrait for AnalyticsService<R> {
    async fn compute(&self) -> Result<UserAnalytics, DomainError> {
        AnalyticsService::compute(self).await
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::infrastructure::user::InMemoryUserRepository;

    /// State backed by a fresh in-memory store, for handler tests
    pub fn in_memory_state() -> (AppState, Arc<InMemoryUserRepository>) {
        let repository = Arc::new(InMemoryUserRepository::new());
        let user_service = Arc::new(UserService::new(repository.clone()));
        let analytics_service = Arc::new(AnalyticsService::new(repository.clone()));

        (
            AppState::new(user_service, analytics_service),
            repository,
        )
    }
}
