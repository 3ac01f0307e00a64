//! Application state shared across all request handlers.
//!
//! The state is built once at startup and cloned into every handler through Axum's
//! state extraction. It holds:
//! - Database connection pool
//! - HTTP client for Steam and identity-provider requests
//! - OAuth2 client, present only when the identity provider is configured
//! - Admin bootstrap code service
//! - Steam response cache
//! - Token signer and the loaded configuration

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    service::{admin::code::AdminCodeService, steam::cache::SteamCache, token::TokenService},
};

/// Type alias for the OAuth2 client configured for the identity provider.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone. The connection pool, `reqwest::Client`, the
/// admin code service and the Steam cache share their storage between clones.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client with redirects disabled and a request timeout.
    pub http_client: reqwest::Client,

    /// `None` when any `OAUTH_*` variable is missing, which disables `/api/auth/*`.
    pub oauth_client: Option<OAuth2Client>,

    /// One-time admin registration codes.
    pub admin_code_service: AdminCodeService,

    /// Cache of Steam store and Web API responses.
    pub steam_cache: SteamCache,

    /// Signs and verifies bearer tokens.
    pub token_service: Arc<TokenService>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: Option<OAuth2Client>,
        admin_code_service: AdminCodeService,
        steam_cache: SteamCache,
        config: Config,
    ) -> Self {
        let token_service = Arc::new(TokenService::from_config(&config));

        Self {
            db,
            http_client,
            oauth_client,
            admin_code_service,
            steam_cache,
            token_service,
            config: Arc::new(config),
        }
    }

    /// Steam API key, if configured.
    pub fn steam_api_key(&self) -> Option<&str> {
        self.config.steam_api_key.as_deref()
    }
}
