//! Cached proxy over the Steam store and Web API.
//!
//! Responses are cached per request kind and appid (`details_`, `screenshots_`,
//! `trailers_`, `achievements_`, `ach_pct_`, `search_`). Only successful upstream
//! answers are cached.

pub mod cache;
pub mod client;

use std::{collections::HashMap, future::Future, time::Duration};

use dioxus_logger::tracing;
use serde_json::{json, Map, Value};

use crate::{
    model::steam::{AchievementDto, MAX_BATCH_APPIDS},
    server::error::{steam::SteamError, AppError},
};

use self::{
    cache::{SteamCache, DEFAULT_TTL, SEARCH_TTL},
    client::{SteamClient, DETAILS_FILTERS},
};

/// A value served by the proxy together with its cache status.
#[derive(Debug, Clone)]
pub struct Cached<T> {
    pub value: T,
    /// Whether the value came from the cache.
    pub hit: bool,
    /// Remaining lifetime in seconds.
    pub ttl: u64,
}

pub struct SteamService<'a> {
    client: SteamClient<'a>,
    cache: &'a SteamCache,
}

impl<'a> SteamService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        cache: &'a SteamCache,
        api_key: Option<&'a str>,
    ) -> Self {
        Self {
            client: SteamClient::new(http_client, api_key),
            cache,
        }
    }

    async fn cached<F, Fut>(
        &self,
        key: String,
        ttl: Duration,
        fetch: F,
    ) -> Result<Cached<Value>, SteamError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, SteamError>>,
    {
        if let Some((value, remaining)) = self.cache.get(&key).await {
            return Ok(Cached {
                value,
                hit: true,
                ttl: remaining,
            });
        }

        let value = fetch().await?;
        self.cache.insert(key, value.clone(), ttl).await;

        Ok(Cached {
            value,
            hit: false,
            ttl: ttl.as_secs(),
        })
    }

    /// Full store details of an app.
    pub async fn details(&self, appid: i64) -> Result<Cached<Value>, SteamError> {
        self.cached(format!("details_{}", appid), DEFAULT_TTL, || {
            self.client.app_details(appid, DETAILS_FILTERS)
        })
        .await
    }

    pub async fn screenshots(&self, appid: i64) -> Result<Cached<Value>, SteamError> {
        self.cached(format!("screenshots_{}", appid), DEFAULT_TTL, || {
            self.client.app_details(appid, "screenshots")
        })
        .await
    }

    pub async fn trailers(&self, appid: i64) -> Result<Cached<Value>, SteamError> {
        self.cached(format!("trailers_{}", appid), DEFAULT_TTL, || {
            self.client.app_details(appid, "movies")
        })
        .await
    }

    /// Achievement schema from the Web API.
    pub async fn achievements(&self, appid: i64) -> Result<Cached<Value>, SteamError> {
        self.cached(format!("achievements_{}", appid), DEFAULT_TTL, || {
            self.client.achievement_schema(appid)
        })
        .await
    }

    pub async fn achievement_percentages(&self, appid: i64) -> Result<Cached<Value>, SteamError> {
        self.cached(format!("ach_pct_{}", appid), DEFAULT_TTL, || {
            self.client.global_achievement_percentages(appid)
        })
        .await
    }

    /// Achievement schema joined with global unlock percentages.
    ///
    /// Missing percentages leave `percent` empty rather than failing the request.
    pub async fn merged_achievements(
        &self,
        appid: i64,
    ) -> Result<Cached<Vec<AchievementDto>>, SteamError> {
        let schema = self.achievements(appid).await?;

        let (percentages, pct_hit, pct_ttl) = match self.achievement_percentages(appid).await {
            Ok(cached) => (parse_percentages(&cached.value), cached.hit, cached.ttl),
            Err(e) => {
                tracing::warn!("No achievement percentages for app {}: {}", appid, e);
                (HashMap::new(), false, 0)
            }
        };

        let achievements = merge_achievements(&schema.value, &percentages);

        Ok(Cached {
            value: achievements,
            hit: schema.hit && pct_hit,
            ttl: if pct_ttl == 0 {
                schema.ttl
            } else {
                schema.ttl.min(pct_ttl)
            },
        })
    }

    /// Searches store apps by name.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Blank query
    pub async fn search(&self, query: &str) -> Result<Cached<Value>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::BadRequest(
                "query parameter 'q' is required".to_string(),
            ));
        }

        Ok(self
            .cached(format!("search_{}", query), SEARCH_TTL, || {
                self.client.search_apps(query)
            })
            .await?)
    }

    /// Full details for several apps, sharing the `details_` cache.
    ///
    /// A failing app yields `{"error": ..}` under its key instead of failing the batch.
    ///
    /// # Returns
    /// - `Ok(Map)` - Details or error object per appid
    /// - `Err(AppError::BadRequest)` - Empty list or more than 50 appids
    pub async fn batch(&self, appids: &[i64]) -> Result<Map<String, Value>, AppError> {
        if appids.is_empty() {
            return Err(AppError::BadRequest(
                "appids must be a non-empty array".to_string(),
            ));
        }
        if appids.len() > MAX_BATCH_APPIDS {
            return Err(AppError::BadRequest(format!(
                "Maximum {} appids per request",
                MAX_BATCH_APPIDS
            )));
        }

        let mut results = Map::new();
        for appid in appids {
            let entry = match self.details(*appid).await {
                Ok(cached) => cached.value,
                Err(e) => json!({ "error": e.to_string() }),
            };
            results.insert(appid.to_string(), entry);
        }

        Ok(results)
    }

    /// Storefront `price_overview` of an app, `None` on any failure or for free apps.
    pub async fn price_overview(&self, appid: i64) -> Option<Value> {
        match self.details(appid).await {
            Ok(cached) => app_data(&cached.value, appid)
                .and_then(|data| data.get("price_overview"))
                .filter(|p| p.is_object())
                .cloned(),
            Err(e) => {
                tracing::warn!("Price lookup for app {} failed: {}", appid, e);
                None
            }
        }
    }

    /// Formatted storefront price such as `"£7.19"`, `None` on any failure.
    pub async fn fetch_price(&self, appid: i64) -> Option<String> {
        self.price_overview(appid)
            .await
            .and_then(|p| p["final_formatted"].as_str().map(String::from))
    }
}

/// The `data` object of an `appdetails` response.
pub fn app_data(details: &Value, appid: i64) -> Option<&Value> {
    details
        .get(appid.to_string())
        .and_then(|app| app.get("data"))
}

/// Price in pounds from a `price_overview` object (`final` is in pence).
pub fn price_gbp(price_overview: &Value) -> Option<f64> {
    price_overview["final"].as_f64().map(|pence| pence / 100.0)
}

fn parse_percentages(body: &Value) -> HashMap<String, f64> {
    body["achievementpercentages"]["achievements"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|entry| {
            let name = entry["name"].as_str()?;
            let percent = match &entry["percent"] {
                Value::Number(n) => n.as_f64()?,
                Value::String(s) => s.parse().ok()?,
                _ => return None,
            };
            Some((name.to_string(), percent))
        })
        .collect()
}

fn merge_achievements(schema: &Value, percentages: &HashMap<String, f64>) -> Vec<AchievementDto> {
    let text = |v: &Value| v.as_str().filter(|s| !s.is_empty()).map(String::from);

    schema["game"]["availableGameStats"]["achievements"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|entry| {
            let name = entry["name"].as_str()?.to_string();
            Some(AchievementDto {
                display_name: text(&entry["displayName"]).unwrap_or_else(|| name.clone()),
                description: text(&entry["description"]),
                icon: text(&entry["icon"]),
                icon_gray: text(&entry["icongray"]),
                hidden: entry["hidden"].as_i64().unwrap_or(0) != 0,
                percent: percentages.get(&name).copied(),
                name,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_schema_with_percentages() {
        let schema = json!({
            "game": {
                "availableGameStats": {
                    "achievements": [
                        {"name": "ACH_WIN", "displayName": "Winner", "hidden": 0,
                         "description": "Win a match", "icon": "https://x/win.jpg"},
                        {"name": "ACH_SECRET", "displayName": "", "hidden": 1}
                    ]
                }
            }
        });
        let percentages = parse_percentages(&json!({
            "achievementpercentages": {
                "achievements": [
                    {"name": "ACH_WIN", "percent": "12.5"},
                    {"name": "ACH_OTHER", "percent": 3.0}
                ]
            }
        }));

        let merged = merge_achievements(&schema, &percentages);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].display_name, "Winner");
        assert_eq!(merged[0].percent, Some(12.5));
        assert!(!merged[0].hidden);
        assert_eq!(merged[1].display_name, "ACH_SECRET");
        assert_eq!(merged[1].percent, None);
        assert!(merged[1].hidden);
    }

    #[test]
    fn schema_without_stats_merges_to_empty() {
        assert!(merge_achievements(&json!({"game": {}}), &HashMap::new()).is_empty());
    }

    #[test]
    fn reads_price_from_app_data() {
        let details = json!({
            "620": {"success": true, "data": {"price_overview": {"final": 719, "final_formatted": "£7.19"}}}
        });

        let overview = app_data(&details, 620).and_then(|d| d.get("price_overview")).unwrap();

        assert_eq!(price_gbp(overview), Some(7.19));
        assert!(app_data(&details, 10).is_none());
    }

    /// Expected: cached details answer without touching the network
    #[tokio::test]
    async fn serves_details_from_cache() {
        let http_client = reqwest::Client::new();
        let cache = SteamCache::new();
        cache
            .insert(
                "details_620",
                json!({"620": {"success": true, "data": {"price_overview": {"final": 999, "final_formatted": "£9.99"}}}}),
                DEFAULT_TTL,
            )
            .await;
        let service = SteamService::new(&http_client, &cache, None);

        let details = service.details(620).await.unwrap();
        assert!(details.hit);

        assert_eq!(service.fetch_price(620).await.as_deref(), Some("£9.99"));
        let batch = service.batch(&[620]).await.unwrap();
        assert!(batch.contains_key("620"));
    }

    /// Expected: batch bounds and blank search are rejected before any request
    #[tokio::test]
    async fn rejects_invalid_batch_and_search() {
        let http_client = reqwest::Client::new();
        let cache = SteamCache::new();
        let service = SteamService::new(&http_client, &cache, None);

        assert!(matches!(service.batch(&[]).await, Err(AppError::BadRequest(_))));
        let too_many: Vec<i64> = (1..=51).collect();
        assert!(matches!(
            service.batch(&too_many).await,
            Err(AppError::BadRequest(msg)) if msg == "Maximum 50 appids per request"
        ));
        assert!(matches!(service.search("  ").await, Err(AppError::BadRequest(_))));
    }

    /// Expected: the schema endpoint needs an api key
    #[tokio::test]
    async fn achievements_need_api_key() {
        let http_client = reqwest::Client::new();
        let cache = SteamCache::new();
        let service = SteamService::new(&http_client, &cache, None);

        assert!(matches!(
            service.achievements(620).await,
            Err(SteamError::ApiKeyMissing)
        ));
    }
}
