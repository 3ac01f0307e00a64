//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with `JWT_SECRET_KEY`. They carry the user id,
//! username and role so the client can decode the role locally for route guarding.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::{
    model::user::TokenClaims,
    server::{
        config::Config,
        error::{auth::AuthError, internal::InternalError, AppError},
        model::user::User,
    },
};

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    exp_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, exp_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            exp_hours,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.jwt_exp_hours)
    }

    /// Signs a token for `user` valid for the configured number of hours.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AppError::InternalErr(TokenSigning))` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            exp: (now + Duration::hours(self.exp_hours)).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| InternalError::TokenSigning(e.to_string()).into())
    }

    /// Verifies the signature and expiry of a token.
    ///
    /// # Returns
    /// - `Ok(TokenClaims)` - Token is valid
    /// - `Err(AuthError::TokenExpired)` - Signature valid but `exp` has passed
    /// - `Err(AuthError::InvalidToken)` - Any other decoding or validation failure
    pub fn decode(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-at-least-16";

    fn user(role: &str) -> User {
        User {
            id: 7,
            username: "alice".to_string(),
            password_hash: None,
            role: role.to_string(),
            provider_subject: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_decodes_to_user_claims() {
        let service = TokenService::new(SECRET, 1);

        let token = service.issue(&user("admin")).unwrap();
        let claims = service.decode(&token).unwrap();

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "alice");
        assert!(claims.is_admin());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let service = TokenService::new(SECRET, -1);
        let token = service.issue(&user("user")).unwrap();

        assert!(matches!(service.decode(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn foreign_or_garbage_tokens_are_invalid() {
        let token = TokenService::new("another-secret-of-16+", 1)
            .issue(&user("user"))
            .unwrap();
        let service = TokenService::new(SECRET, 1);

        assert!(matches!(service.decode(&token), Err(AuthError::InvalidToken)));
        assert!(matches!(service.decode("not.a.jwt"), Err(AuthError::InvalidToken)));
    }
}
