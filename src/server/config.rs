use dioxus_logger::tracing;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_JWT_EXP_HOURS: i64 = 1;
const MIN_JWT_SECRET_LEN: usize = 16;

/// Identity provider endpoints and credentials.
///
/// Only constructed when every `OAUTH_*` variable is present, so the rest of the
/// server can treat `Option<OAuthConfig>` as the "provider enabled" switch.
#[derive(Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub redirect_url: String,
}

pub struct Config {
    pub database_url: String,
    pub app_url: String,

    pub jwt_secret: String,
    pub jwt_exp_hours: i64,

    pub steam_api_key: Option<String>,
    pub steam_price_sync: bool,
    pub seed_file: Option<String>,

    pub oauth: Option<OAuthConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = required("JWT_SECRET_KEY")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_SECRET_KEY".to_string(),
                reason: format!("must be at least {} bytes", MIN_JWT_SECRET_LEN),
            }
            .into());
        }

        let jwt_exp_hours = match optional("JWT_EXP_HOURS") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|hours| *hours > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "JWT_EXP_HOURS".to_string(),
                    reason: format!("expected a positive number of hours, got '{}'", value),
                })?,
            None => DEFAULT_JWT_EXP_HOURS,
        };

        let steam_price_sync = match optional("STEAM_PRICE_SYNC") {
            Some(value) => parse_bool("STEAM_PRICE_SYNC", &value)?,
            None => false,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            jwt_secret,
            jwt_exp_hours,
            steam_api_key: optional("STEAM_API_KEY"),
            steam_price_sync,
            seed_file: optional("SEED_FILE"),
            oauth: oauth_from_env(),
        })
    }

    /// Logs the effective configuration with secrets masked.
    pub fn summary(&self) {
        tracing::info!("App URL: {}", self.app_url);
        tracing::info!("Database: {}", self.database_url);
        tracing::info!(
            "JWT: secret {} ({} hour expiry)",
            mask(&self.jwt_secret),
            self.jwt_exp_hours
        );
        tracing::info!(
            "Steam API key: {}",
            self.steam_api_key
                .as_deref()
                .map(mask)
                .unwrap_or_else(|| "not set".to_string())
        );
        tracing::info!("Steam price sync: {}", self.steam_price_sync);
        tracing::info!(
            "Seed file: {}",
            self.seed_file.as_deref().unwrap_or("not set")
        );
        match &self.oauth {
            Some(oauth) => tracing::info!(
                "Identity provider login enabled (client {})",
                oauth.client_id
            ),
            None => tracing::info!("Identity provider login disabled"),
        }
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", value),
        }),
    }
}

fn oauth_from_env() -> Option<OAuthConfig> {
    Some(OAuthConfig {
        client_id: optional("OAUTH_CLIENT_ID")?,
        client_secret: optional("OAUTH_CLIENT_SECRET")?,
        auth_url: optional("OAUTH_AUTH_URL")?,
        token_url: optional("OAUTH_TOKEN_URL")?,
        userinfo_url: optional("OAUTH_USERINFO_URL")?,
        redirect_url: optional("OAUTH_REDIRECT_URL")?,
    })
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{}****", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boolean_flags() {
        assert!(parse_bool("FLAG", "true").unwrap());
        assert!(parse_bool("FLAG", "ON").unwrap());
        assert!(!parse_bool("FLAG", "0").unwrap());
        assert!(parse_bool("FLAG", "maybe").is_err());
    }

    #[test]
    fn masks_secrets() {
        assert_eq!(mask("supersecretvalue"), "supe****");
        assert_eq!(mask("ab"), "ab****");
    }
}
