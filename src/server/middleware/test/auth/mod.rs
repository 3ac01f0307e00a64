use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{bearer_token, AuthGuard, Permission},
        session::AuthSession,
    },
    model::user::User,
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod optional;
mod require;

const SECRET: &str = "middleware-test-secret";

fn tokens() -> TokenService {
    TokenService::new(SECRET, 1)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Tests extraction of bearer tokens from request headers.
///
/// Expected: token for `Bearer x`, None without header, MissingToken for other schemes
#[test]
fn extracts_bearer_token() {
    assert_eq!(bearer_token(&bearer("abc")).unwrap(), Some("abc"));
    assert_eq!(bearer_token(&HeaderMap::new()).unwrap(), None);

    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
    assert!(matches!(bearer_token(&basic), Err(AuthError::MissingToken)));

    assert!(matches!(
        bearer_token(&bearer(" ")),
        Err(AuthError::MissingToken)
    ));
}
