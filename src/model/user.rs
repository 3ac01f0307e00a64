use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl UserDto {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_code: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TokenDto {
    pub token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ValidateTokenDto {
    pub valid: bool,
    pub username: String,
    pub role: String,
    pub user_id: i32,
    pub expires_at: i64,
}

/// Claims carried by bearer tokens. Timestamps are unix seconds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenClaims {
    pub user_id: i32,
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl TokenClaims {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }
}
