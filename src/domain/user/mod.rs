//! User domain
//!
//! Domain types for user records: the entity, input validation, the
//! repository trait, and derived analytics.

mod analytics;
mod entity;
mod repository;
mod validation;

pub use analytics::{
    average_per_day, UserAnalytics, AVERAGE_WINDOW_DAYS, RECENT_WINDOW_DAYS,
};
pub use entity::{InvalidStatus, NewUser, User, UserStatus};
pub use repository::UserRepository;
pub use validation::{validate_new_user, ValidatedNewUser};
