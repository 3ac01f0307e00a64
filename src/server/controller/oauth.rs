use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession},
    service::oauth::ProviderAuthService,
    state::AppState,
};

/// Where the browser lands after a provider login. The login page then calls
/// `/api/v1.0/auth/token` to swap the session for a bearer token.
const LOGIN_COMPLETE_REDIRECT: &str = "/login?sso=1";

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

fn provider_service(state: &AppState) -> Result<ProviderAuthService<'_>, AppError> {
    match (&state.oauth_client, &state.config.oauth) {
        (Some(client), Some(oauth)) => Ok(ProviderAuthService::new(
            &state.db,
            &state.http_client,
            client,
            &oauth.userinfo_url,
        )),
        _ => Err(AuthError::ProviderDisabled.into()),
    }
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let service = provider_service(&state)?;

    let (url, csrf_token) = service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = provider_service(&state)?;

    validate_csrf(&session, &params.state).await?;

    let user = service.callback(params.code).await?;

    // Drop the pre-login session id before binding the user to it
    session.cycle_id().await?;
    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::temporary(LOGIN_COMPLETE_REDIRECT))
}

pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::temporary("/"))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
