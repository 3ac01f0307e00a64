use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    service::steam::{price_gbp, SteamService},
    state::AppState,
};

/// Every ten minutes.
const CACHE_PURGE_SCHEDULE: &str = "0 */10 * * * *";

/// Daily at 04:00.
const PRICE_SYNC_SCHEDULE: &str = "0 0 4 * * *";

/// Starts the Steam maintenance scheduler.
///
/// - Purges expired Steam cache entries every ten minutes
/// - Refreshes stored prices from the storefront daily, only when `STEAM_PRICE_SYNC` is on
///
/// # Arguments
/// - `state`: Application state holding the cache, HTTP client and database
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let purge_cache = state.steam_cache.clone();
    let purge_job = Job::new_async(CACHE_PURGE_SCHEDULE, move |_uuid, _lock| {
        let cache = purge_cache.clone();

        Box::pin(async move {
            let purged = cache.purge_expired().await;
            if purged > 0 {
                tracing::debug!("Purged {} expired Steam cache entries", purged);
            }
        })
    })?;
    scheduler.add(purge_job).await?;

    if state.config.steam_price_sync {
        let sync_state = state.clone();
        let sync_job = Job::new_async(PRICE_SYNC_SCHEDULE, move |_uuid, _lock| {
            let state = sync_state.clone();

            Box::pin(async move {
                match sync_prices(&state).await {
                    Ok(updated) => tracing::info!("Price sync updated {} games", updated),
                    Err(e) => tracing::error!("Error syncing prices: {}", e),
                }
            })
        })?;
        scheduler.add(sync_job).await?;
    }

    scheduler.start().await?;

    tracing::info!(
        "Steam scheduler started (price sync {})",
        if state.config.steam_price_sync {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(())
}

/// Stores the storefront GBP price of every game.
///
/// Games without a storefront price are skipped. A failed update is logged and
/// the sync moves on.
///
/// # Returns
/// - `Ok(count)` - Number of games whose price was written
pub async fn sync_prices(state: &AppState) -> Result<u64, AppError> {
    let game_repo = GameRepository::new(&state.db);
    let steam = SteamService::new(&state.http_client, &state.steam_cache, state.steam_api_key());

    let mut updated = 0;
    for appid in game_repo.get_all_appids().await? {
        let Some(price) = steam
            .price_overview(appid)
            .await
            .as_ref()
            .and_then(price_gbp)
        else {
            continue;
        };

        match game_repo.set_price(appid, price).await {
            Ok(()) => updated += 1,
            Err(e) => tracing::warn!("Failed to store price for app {}: {}", appid, e),
        }
    }

    Ok(updated)
}
