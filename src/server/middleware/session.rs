//! Type-safe session management wrappers.
//!
//! Sessions only back the identity-provider login. Password logins use bearer
//! tokens and never touch the session. Each wrapper exposes the keys of one
//! concern over the same underlying `Session`.

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_i32_from_string};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Identity of a user signed in through the identity provider.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the signed-in user's id.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the signed-in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is signed in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored id is not an integer
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let Some(user_id) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        Ok(Some(parse_i32_from_string(user_id)?))
    }

    /// Clears all session data on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF state of an identity-provider login in flight.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token so each token validates at most once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token found and removed
    /// - `Ok(None)` - No login in flight
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
