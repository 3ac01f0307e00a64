//! Sign-in through the external identity provider.
//!
//! The provider is a standard OAuth2 authorization-code endpoint with an OpenID
//! style userinfo endpoint. Provider accounts are matched by their `sub` claim and
//! created with the regular user role on first login.

use sea_orm::DatabaseConnection;

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;

pub struct ProviderAuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub userinfo_url: &'a str,
}

impl<'a> ProviderAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }
}
