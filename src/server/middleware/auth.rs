//! Request authentication.
//!
//! A bearer JWT in `Authorization` wins. Without one, the identity-provider user
//! stored in the session is used.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::{TokenClaims, ROLE_ADMIN},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
        service::token::TokenService,
    },
};

pub enum Permission {
    Admin,
}

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    pub role: String,
    /// Expiry of the bearer token, `None` for session logins.
    pub expires_at: Option<i64>,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    fn from_claims(claims: TokenClaims) -> Self {
        Self {
            id: claims.user_id,
            username: claims.username,
            role: claims.role,
            expires_at: Some(claims.exp),
        }
    }

    fn from_user(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            expires_at: None,
        }
    }
}

/// Extracts the token of a `Bearer` authorization header.
///
/// # Returns
/// - `Ok(Some(token))` - A bearer token was sent
/// - `Ok(None)` - No `Authorization` header
/// - `Err(AuthError::MissingToken)` - Header present but not a bearer token
pub fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Some)
        .ok_or(AuthError::MissingToken)
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
    session: &'a Session,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        headers: &'a HeaderMap,
        session: &'a Session,
        tokens: &'a TokenService,
    ) -> Self {
        Self {
            db,
            headers,
            session,
            tokens,
        }
    }

    /// Authenticates the request and checks every permission.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Authenticated caller holding all permissions
    /// - `Err(AuthError::MissingToken)` - Neither a bearer token nor a session user
    /// - `Err(AuthError::TokenExpired | InvalidToken)` - Bearer token rejected
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::AdminRequired)` - Admin permission missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let user = self.authenticate().await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AdminRequired(user.id).into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Authenticates the request if it carries usable credentials.
    ///
    /// Rejected credentials count as anonymous. Database and session failures
    /// are still returned.
    pub async fn optional(&self) -> Result<Option<AuthUser>, AppError> {
        match self.authenticate().await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn authenticate(&self) -> Result<AuthUser, AppError> {
        if let Some(token) = bearer_token(self.headers)? {
            let claims = self.tokens.decode(token)?;
            return Ok(AuthUser::from_claims(claims));
        }

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(AuthUser::from_user(user))
    }
}
