use std::{path::Path, time::Duration};

use dioxus_logger::tracing;
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::{admin::code::AdminCodeService, catalog::CatalogService},
    state::OAuth2Client,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity. They only carry the
/// identity-provider login and its CSRF state.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to apply to the API router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7))))
}

/// Builds the HTTP client used for Steam and identity-provider requests.
///
/// Redirects are disabled so a compromised upstream cannot bounce requests to
/// internal addresses.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the identity provider.
///
/// # Returns
/// - `Ok(Some(client))` - Provider configured
/// - `Ok(None)` - No provider configured, `/api/auth/*` answers 404
/// - `Err(AppError::ConfigErr)` - A provider URL could not be parsed
pub fn setup_oauth_client(config: &Config) -> Result<Option<OAuth2Client>, AppError> {
    let Some(oauth) = &config.oauth else {
        return Ok(None);
    };

    let invalid_url = |name: &str, e: url::ParseError| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    };

    let client = BasicClient::new(ClientId::new(oauth.client_id.clone()))
        .set_client_secret(ClientSecret::new(oauth.client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(oauth.auth_url.clone()).map_err(|e| invalid_url("OAUTH_AUTH_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(oauth.token_url.clone())
                .map_err(|e| invalid_url("OAUTH_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(oauth.redirect_url.clone())
                .map_err(|e| invalid_url("OAUTH_REDIRECT_URL", e))?,
        );

    Ok(Some(client))
}

/// Logs an admin registration link when no admin account exists.
///
/// The link carries a one-time code that grants the admin role on registration.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;
    tracing::info!(
        "No admin account found. Register the first admin within 10 minutes at: {}/register?admin_code={}",
        config.app_url.trim_end_matches('/'),
        code
    );

    Ok(())
}

/// Imports the configured Steam dataset into an empty catalog.
///
/// A failed import is logged and the server starts with whatever is stored.
pub async fn seed_catalog(db: &DatabaseConnection, config: &Config) {
    let Some(path) = config.seed_file.as_deref() else {
        return;
    };

    match CatalogService::new(db).seed_if_empty(Path::new(path)).await {
        Ok(Some(count)) => tracing::info!("Imported {} games from {}", count, path),
        Ok(None) => tracing::info!("Catalog already populated, skipping import of {}", path),
        Err(e) => tracing::error!("Failed to import catalog from {}: {}", path, e),
    }
}
