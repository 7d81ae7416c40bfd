//! User input validation
//!
//! Explicit validation functions returning a structured field -> message
//! result, invoked before any store mutation.

use super::entity::UserStatus;
use crate::domain::error::FieldErrors;

const MAX_NAME_LENGTH: usize = 255;
const MAX_EMAIL_LENGTH: usize = 255;

/// Fully validated input for creating a user
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedNewUser {
    pub name: String,
    pub email: String,
    pub status: UserStatus,
}

/// Validate the raw create-user input.
///
/// All fields are optional at the transport layer; missing or malformed
/// values surface here as per-field messages. Email uniqueness is not
/// checked here, the store enforces it separately.
pub fn validate_new_user(
    name: Option<&str>,
    email: Option<&str>,
    status: Option<&str>,
) -> Result<ValidatedNewUser, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = match name.map(str::trim) {
        Some(n) if !n.is_empty() => {
            if n.len() > MAX_NAME_LENGTH {
                errors.push(
                    "name",
                    format!("Name exceeds maximum length of {} characters.", MAX_NAME_LENGTH),
                );
            }
            Some(n.to_string())
        }
        _ => {
            errors.push("name", "Name cannot be empty.");
            None
        }
    };

    let email = match email.map(str::trim) {
        Some(e) if !e.is_empty() => {
            if e.len() > MAX_EMAIL_LENGTH {
                errors.push(
                    "email",
                    format!("Email exceeds maximum length of {} characters.", MAX_EMAIL_LENGTH),
                );
            } else if !is_well_formed_email(e) {
                errors.push("email", "Email is not a valid email address.");
            }
            Some(e.to_string())
        }
        _ => {
            errors.push("email", "Email cannot be empty.");
            None
        }
    };

    let status = match status {
        Some(s) => match s.parse::<UserStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.push("status", "Status must be \"active\" or \"inactive\".");
                None
            }
        },
        None => {
            errors.push("status", "Status must be \"active\" or \"inactive\".");
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // All three are Some when no errors were recorded
    Ok(ValidatedNewUser {
        name: name.unwrap(),
        email: email.unwrap(),
        status: status.unwrap(),
    })
}

/// Structural email check: a single '@' with non-empty local and domain
/// parts, a dot in the domain, and no whitespace.
fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
