//! In-memory TTL cache for Steam responses.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use serde_json::Value;
use tokio::sync::RwLock;

/// Lifetime of cached store and Web API responses.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Lifetime of cached search results.
pub const SEARCH_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

impl CacheEntry {
    fn remaining(&self, now: Instant) -> Option<Duration> {
        let remaining = self.expires_at.saturating_duration_since(now);
        (!remaining.is_zero()).then_some(remaining)
    }
}

/// Shared cache of raw Steam JSON keyed by request kind and id, e.g. `details_620`.
///
/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct SteamCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl SteamCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a cached value.
    ///
    /// An expired entry is removed and reported as a miss.
    ///
    /// # Returns
    /// - `Some((value, ttl))` - Cached value and its remaining lifetime in whole seconds
    /// - `None` - Nothing cached or the entry expired
    pub async fn get(&self, key: &str) -> Option<(Value, u64)> {
        let now = Instant::now();

        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(entry) => {
                    if let Some(remaining) = entry.remaining(now) {
                        return Some((entry.value.clone(), remaining.as_secs()));
                    }
                }
            }
        }

        let mut entries = self.entries.write().await;
        if entries
            .get(key)
            .is_some_and(|entry| entry.remaining(now).is_none())
        {
            entries.remove(key);
        }
        None
    }

    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    pub async fn insert(&self, key: impl Into<String>, value: Value, ttl: Duration) {
        self.entries.write().await.insert(
            key.into(),
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// Drops every expired entry.
    ///
    /// # Returns
    /// Number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.remaining(now).is_some());
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::time::sleep;

    /// Expected: a stored value is returned with its remaining ttl
    #[tokio::test]
    async fn returns_cached_value_with_ttl() {
        let cache = SteamCache::new();
        cache
            .insert("details_620", json!({"620": {"success": true}}), DEFAULT_TTL)
            .await;

        let (value, ttl) = cache.get("details_620").await.unwrap();

        assert_eq!(value["620"]["success"], json!(true));
        assert!(ttl > 3590 && ttl <= 3600);
        assert!(cache.get("details_10").await.is_none());
    }

    /// Expected: expired entries miss and are removed on read
    #[tokio::test]
    async fn expired_entry_is_removed_on_read() {
        let cache = SteamCache::new();
        cache
            .insert("search_portal", json!([]), Duration::from_millis(10))
            .await;

        sleep(Duration::from_millis(30)).await;

        assert!(cache.get("search_portal").await.is_none());
        assert!(cache.is_empty().await);
    }

    /// Expected: purge drops only expired entries
    #[tokio::test]
    async fn purge_keeps_live_entries() {
        let cache = SteamCache::new();
        cache.insert("a", json!(1), Duration::from_millis(10)).await;
        cache.insert("b", json!(2), Duration::from_millis(10)).await;
        cache.insert("c", json!(3), DEFAULT_TTL).await;

        sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.purge_expired().await, 2);
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("c").await.is_some());
    }

    /// Expected: clones share storage
    #[tokio::test]
    async fn clones_share_entries() {
        let cache = SteamCache::new();
        let clone = cache.clone();

        clone.insert("x", json!("y"), SEARCH_TTL).await;

        assert_eq!(cache.get("x").await.map(|(v, _)| v), Some(json!("y")));
    }
}
