use dioxus::prelude::*;

use crate::{
    client::model::{error::ApiError, token},
    model::user::TokenClaims,
};

#[derive(Clone, PartialEq)]
pub enum AuthState {
    /// Stored token not read yet
    Initializing,
    Anonymous,
    Authenticated(TokenClaims),
}

impl AuthState {
    pub fn claims(&self) -> Option<&TokenClaims> {
        match self {
            AuthState::Authenticated(claims) => Some(claims),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.claims().is_some_and(|c| c.is_admin())
    }
}

/// Signed-in user shared through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn is_admin(&self) -> bool {
        self.inner.read().is_admin()
    }

    pub fn username(&self) -> Option<String> {
        self.inner.read().claims().map(|c| c.username.clone())
    }

    pub fn user_id(&self) -> Option<i32> {
        self.inner.read().claims().map(|c| c.user_id)
    }

    /// Adopts the token in storage, dropping it when expired or malformed.
    pub fn restore(&mut self) {
        let claims = token::load().and_then(|t| token::decode_claims(&t));
        let now = chrono::Utc::now().timestamp();

        if token::is_expired(claims.as_ref(), now) {
            token::clear();
            self.inner.set(AuthState::Anonymous);
        } else if let Some(claims) = claims {
            self.inner.set(AuthState::Authenticated(claims));
        }
    }

    pub fn login(&mut self, token: &str) -> Result<(), ApiError> {
        let Some(claims) = token::decode_claims(token) else {
            return Err(ApiError::client("Received an unreadable token"));
        };

        token::save(token);
        self.inner.set(AuthState::Authenticated(claims));
        Ok(())
    }

    pub fn logout(&mut self) {
        token::clear();
        self.inner.set(AuthState::Anonymous);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}
