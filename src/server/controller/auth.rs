use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, RegisterDto, TokenDto, UserDto, ValidateTokenDto},
    },
    server::{
        controller::require_admin,
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping password authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a password account.
///
/// The admin role is granted only with a valid bootstrap code or when the request
/// carries an admin bearer token.
///
/// # Returns
/// - `201 Created` - Account registered
/// - `400 Bad Request` - Blank credentials or username taken
#[utoipa::path(
    post,
    path = "/api/v1.0/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = MessageDto),
        (status = 400, description = "Invalid or duplicate username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers, &session, &state.token_service)
        .optional()
        .await?;
    let caller_is_admin = caller.is_some_and(|u| u.is_admin());

    let user = AuthService::new(&state.db, &state.admin_code_service)
        .register(payload, caller_is_admin)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(format!(
            "User '{}' registered successfully",
            user.username
        ))),
    ))
}

/// Exchange a username and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/v1.0/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed bearer token", body = TokenDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.admin_code_service)
        .login(payload)
        .await?;

    let token = state.token_service.issue(&user)?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Check a bearer token and return its claims.
#[utoipa::path(
    get,
    path = "/api/v1.0/auth/validate",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token is valid", body = ValidateTokenDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn validate(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &session, &state.token_service)
        .require(&[])
        .await?;

    // Session logins have no token to validate
    let Some(expires_at) = user.expires_at else {
        return Err(AuthError::MissingToken.into());
    };

    Ok((
        StatusCode::OK,
        Json(ValidateTokenDto {
            valid: true,
            username: user.username,
            role: user.role,
            user_id: user.id,
            expires_at,
        }),
    ))
}

/// The signed-in account.
#[utoipa::path(
    get,
    path = "/api/v1.0/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &headers, &session, &state.token_service)
        .require(&[])
        .await?;

    let user = AuthService::new(&state.db, &state.admin_code_service)
        .get_user(auth_user.id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Smoke test for admin access.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/v1.0/auth/admin-test",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Caller is an admin", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn admin_test(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = require_admin(&state, &headers, &session).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Welcome, admin {}!", user.username))),
    ))
}

/// Mint a bearer token for the identity-provider user in the session.
///
/// Called by the client after the provider login redirects back.
#[utoipa::path(
    get,
    path = "/api/v1.0/auth/token",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed bearer token", body = TokenDto),
        (status = 401, description = "No identity-provider session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn session_token(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Err(AuthError::MissingToken.into());
    };

    let user = AuthService::new(&state.db, &state.admin_code_service)
        .get_user(user_id)
        .await?;
    let token = state.token_service.issue(&user)?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}
