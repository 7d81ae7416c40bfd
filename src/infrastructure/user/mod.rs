//! User infrastructure module
//!
//! Store implementations (PostgreSQL and in-memory), the user and
//! analytics services, and fixture seeding.

mod analytics;
mod postgres_repository;
mod repository;
pub mod seed;
mod service;

pub use analytics::AnalyticsService;
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UserService};
