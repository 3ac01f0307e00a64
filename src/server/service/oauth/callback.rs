use dioxus_logger::tracing;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{normalize_username, UpsertProviderUserParams, User},
    service::oauth::ProviderAuthService,
};

/// Subset of the provider's userinfo response.
#[derive(Debug, Deserialize)]
pub struct ProviderUserInfo {
    pub sub: String,
    pub preferred_username: Option<String>,
    pub nickname: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ProviderUserInfo {
    /// First non-blank of `preferred_username`, `nickname`, `name` and `email`,
    /// falling back to the subject.
    pub fn display_name(&self) -> String {
        [
            &self.preferred_username,
            &self.nickname,
            &self.name,
            &self.email,
        ]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or(self.sub.as_str())
        .to_string()
    }
}

impl<'a> ProviderAuthService<'a> {
    /// Completes the authorization-code flow and resolves the local account.
    ///
    /// # Returns
    /// - `Ok(User)` - Existing or newly created account for the provider subject
    /// - `Err(AppError::AuthErr(ProviderLoginFailed))` - Code exchange was rejected
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::ProviderLoginFailed(e.to_string()))?;

        let info = self.fetch_user_info(&token).await?;

        self.upsert_user(UpsertProviderUserParams {
            username: info.display_name(),
            subject: info.sub,
        })
        .await
    }

    async fn fetch_user_info(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<ProviderUserInfo, AppError> {
        let info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderUserInfo>()
            .await?;

        Ok(info)
    }

    /// Finds the account linked to the subject or creates one.
    ///
    /// A new account whose username is already taken gets the first eight
    /// characters of the subject appended.
    pub async fn upsert_user(&self, params: UpsertProviderUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_provider_subject(&params.subject).await? {
            return Ok(user);
        }

        let mut username = normalize_username(&params.username);
        if username.is_empty() || user_repo.find_by_username(&username).await?.is_some() {
            let suffix: String = params.subject.chars().take(8).collect();
            username = normalize_username(&format!("{}-{}", username, suffix));
        }

        let user = user_repo
            .create_provider_user(params.subject, username)
            .await?;
        tracing::info!("Created identity provider account {}", user.username);

        Ok(user)
    }
}
