//! HTTP request handlers.
//!
//! Controllers check access, convert DTOs to params, call one service and map the
//! result back to a DTO. Mutating admin and review endpoints write an audit entry.

pub mod admin;
pub mod advanced;
pub mod auth;
pub mod dashboard;
pub mod developer;
pub mod game;
pub mod misc;
pub mod oauth;
pub mod review;
pub mod steam;

use axum::http::{HeaderMap, Method, Uri};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, AuthUser, Permission},
    service::action_log::AuditContext,
    state::AppState,
};

/// Request parts every audited handler needs.
pub struct RequestMeta {
    pub headers: HeaderMap,
    pub method: Method,
    pub uri: Uri,
}

impl RequestMeta {
    pub fn new(headers: HeaderMap, method: Method, uri: Uri) -> Self {
        Self {
            headers,
            method,
            uri,
        }
    }

    pub fn audit(&self, user: Option<&AuthUser>) -> AuditContext {
        AuditContext::new(user, &self.headers, &self.method, &self.uri)
    }
}

/// Authenticates the request and requires the admin role.
pub async fn require_admin(
    state: &AppState,
    headers: &HeaderMap,
    session: &Session,
) -> Result<AuthUser, AppError> {
    AuthGuard::new(&state.db, headers, session, &state.token_service)
        .require(&[Permission::Admin])
        .await
}
