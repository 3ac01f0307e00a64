use axum::{
    extract::{Path, Query, State},
    http::{header::CACHE_CONTROL, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        game::ImageUrlsDto,
        steam::{AchievementDto, BatchRequestDto},
    },
    server::{
        error::AppError,
        service::steam::{Cached, SteamService},
        state::AppState,
    },
};

/// Tag for grouping Steam proxy endpoints in OpenAPI documentation
pub static STEAM_TAG: &str = "steam";

static X_CACHE_STATUS: HeaderName = HeaderName::from_static("x-cache-status");
static X_CACHE_TTL: HeaderName = HeaderName::from_static("x-cache-ttl");

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// App name to search for
    pub q: Option<String>,
}

/// JSON response carrying the cache status and remaining lifetime of its body.
fn cached_response<T: Serialize>(cached: Cached<T>) -> Response {
    let mut response = (StatusCode::OK, Json(cached.value)).into_response();
    let headers = response.headers_mut();

    headers.insert(
        X_CACHE_STATUS.clone(),
        HeaderValue::from_static(if cached.hit { "HIT" } else { "MISS" }),
    );
    headers.insert(X_CACHE_TTL.clone(), HeaderValue::from(cached.ttl));
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", cached.ttl)) {
        headers.insert(CACHE_CONTROL, value);
    }

    response
}

fn steam(state: &AppState) -> SteamService<'_> {
    SteamService::new(&state.http_client, &state.steam_cache, state.steam_api_key())
}

/// Storefront details of an app, priced in GBP.
#[utoipa::path(
    get,
    path = "/api/steam/{appid}",
    tag = STEAM_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Raw appdetails response"),
        (status = 502, description = "Steam returned no data", body = ErrorDto),
        (status = 504, description = "Steam timed out", body = ErrorDto)
    ),
)]
pub async fn get_details(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let details = steam(&state).details(appid).await?;

    Ok(cached_response(details))
}

#[utoipa::path(
    get,
    path = "/api/steam/{appid}/screenshots",
    tag = STEAM_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Raw appdetails response with screenshots"),
        (status = 502, description = "Steam returned no data", body = ErrorDto),
        (status = 504, description = "Steam timed out", body = ErrorDto)
    ),
)]
pub async fn get_screenshots(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let screenshots = steam(&state).screenshots(appid).await?;

    Ok(cached_response(screenshots))
}

#[utoipa::path(
    get,
    path = "/api/steam/{appid}/trailers",
    tag = STEAM_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Raw appdetails response with movies"),
        (status = 502, description = "Steam returned no data", body = ErrorDto),
        (status = 504, description = "Steam timed out", body = ErrorDto)
    ),
)]
pub async fn get_trailers(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let trailers = steam(&state).trailers(appid).await?;

    Ok(cached_response(trailers))
}

/// CDN image URLs of an app. No upstream request is made.
#[utoipa::path(
    get,
    path = "/api/steam/{appid}/images",
    tag = STEAM_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Image URLs", body = ImageUrlsDto)
    ),
)]
pub async fn get_images(Path(appid): Path<i64>) -> impl IntoResponse {
    (StatusCode::OK, Json(ImageUrlsDto::for_appid(appid)))
}

/// Achievement schema from the Web API.
///
/// # Returns
/// - `503 Service Unavailable` - `STEAM_API_KEY` is not configured
#[utoipa::path(
    get,
    path = "/api/steam/{appid}/achievements",
    tag = STEAM_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Raw achievement schema"),
        (status = 502, description = "Steam request failed", body = ErrorDto),
        (status = 503, description = "Steam API key missing", body = ErrorDto)
    ),
)]
pub async fn get_achievements(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let achievements = steam(&state).achievements(appid).await?;

    Ok(cached_response(achievements))
}

#[utoipa::path(
    get,
    path = "/api/steam/{appid}/achievement-percentages",
    tag = STEAM_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Raw global unlock percentages"),
        (status = 502, description = "Steam request failed", body = ErrorDto)
    ),
)]
pub async fn get_achievement_percentages(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let percentages = steam(&state).achievement_percentages(appid).await?;

    Ok(cached_response(percentages))
}

/// Achievement schema joined with global unlock percentages.
#[utoipa::path(
    get,
    path = "/api/steam/{appid}/achievements/merged",
    tag = STEAM_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Achievements with unlock percentages", body = Vec<AchievementDto>),
        (status = 502, description = "Steam request failed", body = ErrorDto),
        (status = 503, description = "Steam API key missing", body = ErrorDto)
    ),
)]
pub async fn get_merged_achievements(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let achievements = steam(&state).merged_achievements(appid).await?;

    Ok(cached_response(achievements))
}

/// Search store apps by name.
#[utoipa::path(
    get,
    path = "/api/steam/search",
    tag = STEAM_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Raw search results"),
        (status = 400, description = "Missing query", body = ErrorDto),
        (status = 502, description = "Steam request failed", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let results = steam(&state)
        .search(query.q.as_deref().unwrap_or_default())
        .await?;

    Ok(cached_response(results))
}

/// Details of up to 50 apps in one request.
///
/// A failing app yields an error object under its key.
#[utoipa::path(
    post,
    path = "/api/steam/batch",
    tag = STEAM_TAG,
    request_body = BatchRequestDto,
    responses(
        (status = 200, description = "Details or error per appid"),
        (status = 400, description = "Between 1 and 50 appids required", body = ErrorDto)
    ),
)]
pub async fn batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let results = steam(&state).batch(&payload.appids).await?;

    Ok((StatusCode::OK, Json(results)))
}
