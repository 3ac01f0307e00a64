//! User domain models and parameters.
//!
//! Users sign in either with a password (argon2 hash stored on the row) or through
//! the identity provider, in which case the provider's `sub` claim is stored as
//! `provider_subject` and no password is set.

use chrono::{DateTime, Utc};

use crate::model::user::{UserDto, ROLE_ADMIN, ROLE_USER};

/// An application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lowercased, trimmed login name.
    pub username: String,
    /// Argon2 PHC string, `None` for identity-provider accounts.
    pub password_hash: Option<String>,
    /// Either `"user"` or `"admin"`.
    pub role: String,
    pub provider_subject: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            role: entity.role,
            provider_subject: entity.provider_subject,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: self.role,
        }
    }
}

/// Normalizes a login name for storage and lookup.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

/// Parameters for registering a password account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Already normalized username.
    pub username: String,
    pub password_hash: String,
    pub admin: bool,
}

impl CreateUserParams {
    pub fn role(&self) -> &'static str {
        if self.admin {
            ROLE_ADMIN
        } else {
            ROLE_USER
        }
    }
}

/// Parameters for signing in through the identity provider.
///
/// Existing accounts are matched by `subject` and keep their role.
#[derive(Debug, Clone)]
pub struct UpsertProviderUserParams {
    pub subject: String,
    /// Preferred username from the provider's userinfo, not yet normalized.
    pub username: String,
}
