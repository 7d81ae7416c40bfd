//! PostgreSQL user repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::user::{NewUser, User, UserRepository, UserStatus};
use crate::domain::DomainError;

/// PostgreSQL implementation of `UserRepository`
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, status, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to find user by email: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email, status, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.status.as_str())
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!("Email '{}' already exists", user.email))
            } else {
                DomainError::storage(format!("Failed to insert user: {}", e))
            }
        })?;

        Ok(User {
            id,
            name: user.name,
            email: user.email,
            status: user.status,
            created_at: user.created_at,
        })
    }

    async fn list(&self, status: Option<UserStatus>) -> Result<Vec<User>, DomainError> {
        let rows = match status {
            Some(s) => {
                sqlx::query(
                    r#"
                    SELECT id, name, email, status, created_at
                    FROM users
                    WHERE status = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(s.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, name, email, status, created_at
                    FROM users
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count users: {}", e)))?;

        Ok(count as u64)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE created_at >= $1")
                .bind(since)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to count recent users: {}", e))
                })?;

        Ok(count as u64)
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let status: String = row.get("status");

    let status = status
        .parse::<UserStatus>()
        .map_err(|e| DomainError::storage(format!("Invalid status in database: {}", e)))?;

    Ok(User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        status,
        created_at: row.get("created_at"),
    })
}
