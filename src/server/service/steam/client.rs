//! Thin HTTP client for the Steam store and Web API.
//!
//! Every call returns the upstream JSON untouched. Interpretation of the payloads
//! lives in `SteamService`.

use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;
use url::Url;

use crate::server::error::steam::SteamError;

const STORE_APPDETAILS_URL: &str = "https://store.steampowered.com/api/appdetails";
const SCHEMA_URL: &str = "https://api.steampowered.com/ISteamUserStats/GetSchemaForGame/v2/";
const GLOBAL_PERCENTAGES_URL: &str =
    "https://api.steampowered.com/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v2/";
const SEARCH_APPS_URL: &str = "https://steamcommunity.com/actions/SearchApps/";

/// Filters requested for the full details payload.
pub const DETAILS_FILTERS: &str =
    "basic,movies,screenshots,price_overview,developers,publishers,genres,release_date,achievements";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Store country code; prices come back in GBP.
const STORE_COUNTRY: &str = "gb";

pub struct SteamClient<'a> {
    http_client: &'a reqwest::Client,
    api_key: Option<&'a str>,
}

impl<'a> SteamClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_key: Option<&'a str>) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    /// Fetches `appdetails` for one app with the given filter list.
    ///
    /// # Returns
    /// - `Ok(Value)` - Raw response, `{"<appid>": {"success": .., "data": ..}}`
    /// - `Err(SteamError::FetchFailed)` - Steam answered without `success: true`
    /// - `Err(SteamError::Timeout | RequestFailed)` - Transport failure
    pub async fn app_details(&self, appid: i64, filters: &str) -> Result<Value, SteamError> {
        let appid_param = appid.to_string();
        let body = self
            .get_json(
                STORE_APPDETAILS_URL,
                &[
                    ("appids", appid_param.as_str()),
                    ("filters", filters),
                    ("cc", STORE_COUNTRY),
                ],
            )
            .await?;

        if body[appid_param.as_str()]["success"].as_bool() != Some(true) {
            return Err(SteamError::FetchFailed(appid));
        }

        Ok(body)
    }

    /// Fetches the achievement schema. Requires a Web API key.
    pub async fn achievement_schema(&self, appid: i64) -> Result<Value, SteamError> {
        let key = self.api_key.ok_or(SteamError::ApiKeyMissing)?;
        let appid = appid.to_string();

        self.get_json(SCHEMA_URL, &[("key", key), ("appid", appid.as_str())])
            .await
    }

    pub async fn global_achievement_percentages(&self, appid: i64) -> Result<Value, SteamError> {
        let appid = appid.to_string();
        self.get_json(GLOBAL_PERCENTAGES_URL, &[("gameid", appid.as_str())])
            .await
    }

    /// Searches store apps by name.
    pub async fn search_apps(&self, query: &str) -> Result<Value, SteamError> {
        let mut url = Url::parse(SEARCH_APPS_URL)
            .map_err(|e| SteamError::RequestFailed(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SteamError::RequestFailed("search url cannot be a base".to_string()))?
            .pop_if_empty()
            .push(query);

        self.get_json(url.as_str(), &[]).await
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, SteamError> {
        let response = self
            .http_client
            .get(url)
            .query(query)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SteamError::RequestFailed(format!(
                "{} answered {}",
                url, status
            )));
        }

        Ok(response.json::<Value>().await?)
    }
}
