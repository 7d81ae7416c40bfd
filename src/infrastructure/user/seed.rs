//! Fixture data for seeding a development database

use chrono::{Duration, Utc};
use tracing::info;

use crate::domain::user::{NewUser, UserRepository, UserStatus};
use crate::domain::DomainError;

/// A fixture entry: user attributes plus a creation-time offset in days
struct SeedUser {
    name: &'static str,
    email: &'static str,
    status: UserStatus,
    days_ago: i64,
}

const SEED_USERS: &[SeedUser] = &[
    // 8 users created within the last 7 days
    seed("John Smith", "john.smith@example.com", UserStatus::Active, 1),
    seed("Emma Johnson", "emma.johnson@example.com", UserStatus::Active, 2),
    seed("Michael Brown", "michael.brown@example.com", UserStatus::Inactive, 3),
    seed("Sophia Davis", "sophia.davis@example.com", UserStatus::Active, 4),
    seed("William Wilson", "william.wilson@example.com", UserStatus::Active, 5),
    seed("Olivia Martinez", "olivia.martinez@example.com", UserStatus::Inactive, 6),
    seed("James Anderson", "james.anderson@example.com", UserStatus::Active, 7),
    seed("Isabella Taylor", "isabella.taylor@example.com", UserStatus::Active, 7),
    // 5 users created between 8 and 15 days ago
    seed("Benjamin Thomas", "benjamin.thomas@example.com", UserStatus::Active, 8),
    seed("Mia Hernandez", "mia.hernandez@example.com", UserStatus::Inactive, 10),
    seed("Lucas Moore", "lucas.moore@example.com", UserStatus::Active, 12),
    seed("Charlotte Martin", "charlotte.martin@example.com", UserStatus::Active, 14),
    seed("Henry Jackson", "henry.jackson@example.com", UserStatus::Inactive, 15),
    // 12 users older than 15 days
    seed("Amelia Garcia", "amelia.garcia@example.com", UserStatus::Active, 20),
    seed("Alexander Lee", "alexander.lee@example.com", UserStatus::Inactive, 25),
    seed("Evelyn Harris", "evelyn.harris@example.com", UserStatus::Active, 30),
    seed("Sebastian Clark", "sebastian.clark@example.com", UserStatus::Active, 35),
    seed("Abigail Lewis", "abigail.lewis@example.com", UserStatus::Inactive, 40),
    seed("Daniel Robinson", "daniel.robinson@example.com", UserStatus::Active, 45),
    seed("Emily Walker", "emily.walker@example.com", UserStatus::Active, 50),
    seed("Matthew Hall", "matthew.hall@example.com", UserStatus::Inactive, 60),
    seed("Harper Allen", "harper.allen@example.com", UserStatus::Active, 70),
    seed("David Young", "david.young@example.com", UserStatus::Active, 80),
    seed("Ella King", "ella.king@example.com", UserStatus::Inactive, 90),
    seed("Joseph Wright", "joseph.wright@example.com", UserStatus::Active, 100),
];

const fn seed(
    name: &'static str,
    email: &'static str,
    status: UserStatus,
    days_ago: i64,
) -> SeedUser {
    SeedUser {
        name,
        email,
        status,
        days_ago,
    }
}

/// Insert the fixture users into the store.
///
/// Entries whose email already exists are skipped, so the command is
/// safe to run repeatedly.
pub async fn load_fixtures<R: UserRepository>(repository: &R) -> Result<u64, DomainError> {
    let now = Utc::now();
    let mut inserted = 0;

    for entry in SEED_USERS {
        if repository.email_exists(entry.email).await? {
            continue;
        }

        let user = NewUser::new(entry.name, entry.email, entry.status)
            .with_created_at(now - Duration::days(entry.days_ago));

        repository.insert(user).await?;
        inserted += 1;
    }

    info!(inserted, total = SEED_USERS.len(), "Fixture users loaded");
    Ok(inserted)
}
