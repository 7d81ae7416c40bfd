//! Analytics service computing creation statistics from store counts

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::user::{
    average_per_day, UserAnalytics, UserRepository, AVERAGE_WINDOW_DAYS, RECENT_WINDOW_DAYS,
};
use crate::domain::DomainError;

/// Computes aggregate statistics about record creation over time.
///
/// Works only with counts returned by the store, never materializing
/// record lists, so application-side work is O(1) regardless of store
/// size. Results are recomputed from live counts on every call; there
/// is no caching.
#[derive(Debug)]
pub struct AnalyticsService<R: UserRepository> {
    repository: Arc<R>,
    recent_window_days: i64,
    average_window_days: i64,
}

impl<R: UserRepository> AnalyticsService<R> {
    /// Create a service with the default windows (15-day recent count,
    /// 7-day average)
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_windows(repository, RECENT_WINDOW_DAYS, AVERAGE_WINDOW_DAYS)
    }

    /// Create a service with custom trailing windows, in days
    pub fn with_windows(repository: Arc<R>, recent_days: i64, average_days: i64) -> Self {
        Self {
            repository,
            recent_window_days: recent_days,
            average_window_days: average_days,
        }
    }

    /// Compute the current analytics snapshot.
    ///
    /// A single `now` is taken for both window computations to avoid
    /// clock-skew artifacts within one call. The three counts are still
    /// independent store queries with no shared transaction; a
    /// concurrent insert between them can leave the combined result
    /// momentarily inconsistent, which is an accepted tolerance.
    pub async fn compute(&self) -> Result<UserAnalytics, DomainError> {
        let now = Utc::now();

        let total_users = self.repository.count_all().await?;

        let recent_cutoff = now - Duration::days(self.recent_window_days);
        let users_in_recent_window = self.repository.count_created_since(recent_cutoff).await?;

        let average = if self.average_window_days <= 0 {
            0.0
        } else {
            let average_cutoff = now - Duration::days(self.average_window_days);
            let count = self.repository.count_created_since(average_cutoff).await?;
            average_per_day(count, self.average_window_days)
        };

        Ok(UserAnalytics {
            total_users,
            users_last_15_days: users_in_recent_window,
            average_users_per_day_last_7_days: average,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{NewUser, UserStatus};
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    // One minute inside the day boundary so that the wall clock moving
    // between insert and compute cannot push a record out of its window
    async fn insert_days_ago(repo: &InMemoryUserRepository, email: &str, days_ago: i64) {
        repo.insert(
            NewUser::new("Test User", email, UserStatus::Active)
                .with_created_at(Utc::now() - Duration::days(days_ago) + Duration::minutes(1)),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_empty_store() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = AnalyticsService::new(repo);

        let analytics = service.compute().await.unwrap();

        assert_eq!(analytics.total_users, 0);
        assert_eq!(analytics.users_last_15_days, 0);
        assert_eq!(analytics.average_users_per_day_last_7_days, 0.0);
    }

    #[tokio::test]
    async fn test_one_record_per_day_for_a_week() {
        let repo = Arc::new(InMemoryUserRepository::new());

        // One record per day at daysAgo = 1..=7, all inside the 7-day window
        for days_ago in 1..=7 {
            insert_days_ago(&repo, &format!("user{}@example.com", days_ago), days_ago).await;
        }

        let service = AnalyticsService::new(repo);
        let analytics = service.compute().await.unwrap();

        assert_eq!(analytics.total_users, 7);
        assert_eq!(analytics.users_last_15_days, 7);
        assert_eq!(analytics.average_users_per_day_last_7_days, 1.0);
    }

    #[tokio::test]
    async fn test_windows_partition_records() {
        let repo = Arc::new(InMemoryUserRepository::new());

        // 2 within 7 days, 3 more within 15 days, 4 older
        for (i, days_ago) in [1, 5, 8, 10, 14, 20, 30, 60, 100].iter().enumerate() {
            insert_days_ago(&repo, &format!("user{}@example.com", i), *days_ago).await;
        }

        let service = AnalyticsService::new(repo);
        let analytics = service.compute().await.unwrap();

        assert_eq!(analytics.total_users, 9);
        assert_eq!(analytics.users_last_15_days, 5);
        // round(2 / 7, 2)
        assert_eq!(analytics.average_users_per_day_last_7_days, 0.29);
    }

    #[tokio::test]
    async fn test_total_ignores_windows() {
        let repo = Arc::new(InMemoryUserRepository::new());

        insert_days_ago(&repo, "ancient@example.com", 400).await;

        let service = AnalyticsService::new(repo);
        let analytics = service.compute().await.unwrap();

        assert_eq!(analytics.total_users, 1);
        assert_eq!(analytics.users_last_15_days, 0);
    }

    #[tokio::test]
    async fn test_non_positive_average_window_yields_zero() {
        let repo = Arc::new(InMemoryUserRepository::new());
        insert_days_ago(&repo, "a@example.com", 1).await;

        let service = AnalyticsService::with_windows(repo, RECENT_WINDOW_DAYS, 0);
        let analytics = service.compute().await.unwrap();

        assert_eq!(analytics.average_users_per_day_last_7_days, 0.0);
        assert_eq!(analytics.total_users, 1);
    }

    #[tokio::test]
    async fn test_custom_windows() {
        let repo = Arc::new(InMemoryUserRepository::new());

        insert_days_ago(&repo, "a@example.com", 1).await;
        insert_days_ago(&repo, "b@example.com", 3).await;
        insert_days_ago(&repo, "c@example.com", 9).await;

        let service = AnalyticsService::with_windows(repo, 2, 4);
        let analytics = service.compute().await.unwrap();

        assert_eq!(analytics.users_last_15_days, 1);
        // 2 records in 4 days
        assert_eq!(analytics.average_users_per_day_last_7_days, 0.5);
    }
}
