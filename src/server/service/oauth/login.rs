use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::oauth::ProviderAuthService;

impl<'a> ProviderAuthService<'a> {
    /// Builds the provider authorization URL.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Redirect target and the state value to keep in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url()
    }
}
