//! Derived analytics over user creation times

use serde::{Deserialize, Serialize};

/// Trailing window for the "recent users" count, in days
pub const RECENT_WINDOW_DAYS: i64 = 15;

/// Trailing window for the average creation rate, in days
pub const AVERAGE_WINDOW_DAYS: i64 = 7;

/// Non-persisted summary of record counts and creation rates.
///
/// Recomputed from live counts on every request; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnalytics {
    pub total_users: u64,
    pub users_last_15_days: u64,
    pub average_users_per_day_last_7_days: f64,
}

/// Average creations per day over a trailing window, rounded to two
/// decimal places. A non-positive window yields 0.00 rather than an
/// error so the endpoint always returns a value.
pub fn average_per_day(count: u64, days: i64) -> f64 {
    if days <= 0 {
        return 0.0;
    }

    round2(count as f64 / days as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
