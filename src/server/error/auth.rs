use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token in the `Authorization` header and no session user.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing or invalid token")]
    MissingToken,

    /// Bearer token signature is valid but its `exp` claim has passed.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token has expired")]
    TokenExpired,

    /// Bearer token could not be decoded or its signature does not verify.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid token")]
    InvalidToken,

    /// The user referenced by a session or token no longer exists.
    ///
    /// Results in a 401 Unauthorized response, the client should log in again.
    #[error("User {0} referenced by credentials no longer exists")]
    UserNotInDatabase(i32),

    /// Username unknown or password mismatch on login.
    ///
    /// Both cases share one message so usernames cannot be probed.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Authenticated user lacks the admin role.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} attempted an admin action without the admin role")]
    AdminRequired(i32),

    /// Authenticated user is neither the author of a review nor an admin.
    ///
    /// Results in a 403 Forbidden response. The field holds the attempted verb
    /// ("edit" or "delete").
    #[error("Not authorized to {0} this review")]
    NotReviewOwner(&'static str),

    /// Registration attempted with a username that is already taken.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Username already exists")]
    UsernameTaken,

    /// CSRF state validation failed during the identity provider callback.
    ///
    /// The state token in the callback URL does not match the token stored in the
    /// session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Identity provider login requested but no provider is configured.
    ///
    /// Results in a 404 Not Found response.
    #[error("Identity provider login is not configured")]
    ProviderDisabled,

    /// Identity provider rejected the code exchange or returned an unusable profile.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Identity provider login failed: {0}")]
    ProviderLoginFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token and credential problems map to 401 with the message the client shows
/// verbatim, permission problems map to 403, and login flow problems map to 400.
/// Every error is logged at debug level before being converted.
///
/// # Returns
/// - 400 Bad Request - Duplicate username, CSRF mismatch or provider failure
/// - 401 Unauthorized - Missing, expired or invalid token and bad credentials
/// - 403 Forbidden - Admin role required or review not owned by the user
/// - 404 Not Found - Identity provider not configured
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::MissingToken | Self::TokenExpired | Self::InvalidToken => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::UserNotInDatabase(_) => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::AdminRequired(_) => (StatusCode::FORBIDDEN, "Admin access required".to_string()),
            Self::NotReviewOwner(_) => (StatusCode::FORBIDDEN, self.to_string()),
            Self::UsernameTaken => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::CsrfValidationFailed | Self::ProviderLoginFailed(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.".to_string(),
            ),
            Self::ProviderDisabled => (
                StatusCode::NOT_FOUND,
                "Identity provider login is not enabled".to_string(),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
