use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PaginatedDto},
        game::{
            CreateGameDto, EnrichedGameDto, GameCreatedDto, GameDetailDto, GameFilterQuery,
            GameSort, GameStatsDto, GameSummaryDto, UpdateGameDto,
        },
    },
    server::{
        controller::{require_admin, RequestMeta},
        error::AppError,
        model::{
            action_log::{LogAction, LogStatus},
            game::{CreateGameParams, GameFilter, UpdateGameParams},
        },
        service::{action_log::ActionLogService, game::GameService, steam::SteamService},
        state::AppState,
        util::pagination::{paginated, PageLinkBase, PageParams},
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

const GAMES_COLLECTION: &str = "games";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GameListQuery {
    /// Page number, starting at 1
    pub pn: Option<u64>,
    /// Entries per page
    pub ps: Option<u64>,
    /// `default`, `topRated`, `value` or `sentiment`
    pub sort: Option<String>,
}

/// List the catalog.
///
/// # Returns
/// - `200 OK` - One page of game summaries in the requested sort mode
#[utoipa::path(
    get,
    path = "/api/v1.0/games",
    tag = GAME_TAG,
    params(GameListQuery),
    responses(
        (status = 200, description = "Page of games", body = PaginatedDto<GameSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(
    State(state): State<AppState>,
    Query(query): Query<GameListQuery>,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let sort = query
        .sort
        .as_deref()
        .map(GameSort::from_query)
        .unwrap_or_default();
    let params = PageParams {
        pn: query.pn,
        ps: query.ps,
    };

    let (games, total) = GameService::new(&state.db).list(sort, &params).await?;

    Ok((
        StatusCode::OK,
        Json(paginated(games, &PageLinkBase::from_uri(&uri), &params, total)),
    ))
}

/// Get one game with all stored fields and derived review stats.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/{appid}",
    tag = GAME_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Game detail", body = GameDetailDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).get_detail(appid).await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Add a game.
///
/// # Access Control
/// - `Admin` - Only admins can add games
///
/// # Returns
/// - `201 Created` - Game added
/// - `400 Bad Request` - Missing required fields or duplicate appid
/// - `401 Unauthorized` / `403 Forbidden` - Not signed in or not an admin
#[utoipa::path(
    post,
    path = "/api/v1.0/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Game added", body = GameCreatedDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_game(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_admin(&state, &headers, &session).await?;
    let meta = RequestMeta::new(headers, method, uri);

    let params = CreateGameParams::from_dto(payload, user.username.clone())?;
    let game = GameService::new(&state.db).create(params).await?;

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(Some(&user)),
            LogAction::Create,
            GAMES_COLLECTION,
            game.appid,
            json!({ "name": game.name }),
            LogStatus::Success,
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(GameCreatedDto {
            message: "Game added successfully".to_string(),
            appid: game.appid,
        }),
    ))
}

/// Update any subset of a game's fields.
///
/// # Access Control
/// - `Admin` - Only admins can edit games
///
/// # Returns
/// - `200 OK` - Updated game
/// - `400 Bad Request` - No fields or a negative price
/// - `404 Not Found` - Unknown appid
#[utoipa::path(
    put,
    path = "/api/v1.0/games/{appid}",
    tag = GAME_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Game updated", body = GameDetailDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_game(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Path(appid): Path<i64>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_admin(&state, &headers, &session).await?;
    let meta = RequestMeta::new(headers, method, uri);
    let details = serde_json::to_value(&payload)?;

    let service = GameService::new(&state.db);
    let result = match UpdateGameParams::from_dto(payload, user.username.clone()) {
        Ok(params) => service.update(appid, params).await,
        Err(e) => Err(e),
    };

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(Some(&user)),
            LogAction::Update,
            GAMES_COLLECTION,
            appid,
            details,
            if result.is_ok() {
                LogStatus::Success
            } else {
                LogStatus::Failed
            },
        )
        .await;

    let game = result?;
    let detail = service.get_detail(game.appid).await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Delete a game and its reviews.
///
/// # Access Control
/// - `Admin` - Only admins can delete games
#[utoipa::path(
    delete,
    path = "/api/v1.0/games/{appid}",
    tag = GAME_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Game deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_game(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_admin(&state, &headers, &session).await?;
    let meta = RequestMeta::new(headers, method, uri);

    GameService::new(&state.db).delete(appid).await?;

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(Some(&user)),
            LogAction::Delete,
            GAMES_COLLECTION,
            appid,
            json!({}),
            LogStatus::Success,
        )
        .await;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "Game {} deleted by {}",
            appid, user.username
        ))),
    ))
}

/// Filter the catalog by list fields, price and name.
///
/// # Returns
/// - `200 OK` - Page of matching games
/// - `400 Bad Request` - Unsupported language code
#[utoipa::path(
    get,
    path = "/api/v1.0/games/filter",
    tag = GAME_TAG,
    params(GameFilterQuery),
    responses(
        (status = 200, description = "Page of matching games", body = PaginatedDto<GameSummaryDto>),
        (status = 400, description = "Invalid language code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_games(
    State(state): State<AppState>,
    Query(query): Query<GameFilterQuery>,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let filter = GameFilter::from_query(&query)?;
    let params = PageParams {
        pn: query.pn,
        ps: query.ps,
    };

    let (games, total) = GameService::new(&state.db).filter(&filter, &params).await?;

    Ok((
        StatusCode::OK,
        Json(paginated(games, &PageLinkBase::from_uri(&uri), &params, total)),
    ))
}

/// Catalog-wide statistics.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/stats",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Catalog statistics", body = GameStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = GameService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Game detail combined with live storefront data and image URLs.
///
/// A Steam failure is reported in `steam_error` and never fails the request.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/{appid}/enriched",
    tag = GAME_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Enriched game detail", body = EnrichedGameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enriched_game(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let steam = SteamService::new(&state.http_client, &state.steam_cache, state.steam_api_key());

    let game = GameService::new(&state.db)
        .get_enriched(appid, &steam)
        .await?;

    Ok((StatusCode::OK, Json(game)))
}
