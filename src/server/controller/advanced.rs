use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        advanced::{
            AdvancedSearchQuery, LimitQuery, SentimentGameDto, TopEnrichedGameDto, TopGameDto,
            TopQuery, ValueGameDto, DEFAULT_RANKING_LIMIT,
        },
        api::{ErrorDto, PaginatedDto},
        game::GameSummaryDto,
    },
    server::{
        error::AppError,
        model::game::GameFilter,
        service::{advanced::AdvancedService, steam::SteamService},
        state::AppState,
        util::pagination::{paginated, PageLinkBase, PageParams},
    },
};

/// Tag for grouping ranking and search endpoints in OpenAPI documentation
pub static ADVANCED_TAG: &str = "advanced";

/// Games ranked by one metric.
///
/// # Returns
/// - `200 OK` - Highest ranked games
/// - `400 Bad Request` - Metric is not `positive`, `metacritic_score` or `peak_ccu`
#[utoipa::path(
    get,
    path = "/api/v1.0/games/advanced/top",
    tag = ADVANCED_TAG,
    params(TopQuery),
    responses(
        (status = 200, description = "Top games", body = Vec<TopGameDto>),
        (status = 400, description = "Invalid metric", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<impl IntoResponse, AppError> {
    let metric = AdvancedService::parse_metric(query.metric.as_deref())?;

    let games = AdvancedService::new(&state.db)
        .top(metric, query.limit.unwrap_or(DEFAULT_RANKING_LIMIT))
        .await?;

    Ok((StatusCode::OK, Json(games)))
}

/// Games with the highest share of positive storefront reviews.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/advanced/sentiment",
    tag = ADVANCED_TAG,
    params(LimitQuery),
    responses(
        (status = 200, description = "Sentiment leaders", body = Vec<SentimentGameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sentiment(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let games = AdvancedService::new(&state.db)
        .sentiment(query.limit.unwrap_or(DEFAULT_RANKING_LIMIT))
        .await?;

    Ok((StatusCode::OK, Json(games)))
}

/// Paid games with the best positive ratio per pound.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/advanced/value",
    tag = ADVANCED_TAG,
    params(LimitQuery),
    responses(
        (status = 200, description = "Value picks", body = Vec<ValueGameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_value(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let games = AdvancedService::new(&state.db)
        .value(query.limit.unwrap_or(DEFAULT_RANKING_LIMIT))
        .await?;

    Ok((StatusCode::OK, Json(games)))
}

/// Combined search over name, companies, genres, tags, price and metacritic score.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/advanced/search",
    tag = ADVANCED_TAG,
    params(AdvancedSearchQuery),
    responses(
        (status = 200, description = "Page of matching games", body = PaginatedDto<GameSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<AdvancedSearchQuery>,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let filter = GameFilter::from_advanced(&query);
    let params = PageParams {
        pn: query.pn,
        ps: query.ps,
    };

    let (games, total) = AdvancedService::new(&state.db)
        .search(&filter, &params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(paginated(games, &PageLinkBase::from_uri(&uri), &params, total)),
    ))
}

/// Top ranking with live storefront prices.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/advanced/top-enriched",
    tag = ADVANCED_TAG,
    params(TopQuery),
    responses(
        (status = 200, description = "Top games with prices", body = Vec<TopEnrichedGameDto>),
        (status = 400, description = "Invalid metric", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_enriched(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<impl IntoResponse, AppError> {
    let metric = AdvancedService::parse_metric(query.metric.as_deref())?;
    let steam = SteamService::new(&state.http_client, &state.steam_cache, state.steam_api_key());

    let games = AdvancedService::new(&state.db)
        .top_enriched(metric, query.limit.unwrap_or(DEFAULT_RANKING_LIMIT), &steam)
        .await?;

    Ok((StatusCode::OK, Json(games)))
}
