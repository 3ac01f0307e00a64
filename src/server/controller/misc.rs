use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        misc::{MiscGameDto, UpdateMiscDto, UpsertMiscDto},
    },
    server::{
        controller::{require_admin, RequestMeta},
        error::AppError,
        model::action_log::{LogAction, LogStatus},
        service::{action_log::ActionLogService, misc::MiscService},
        state::AppState,
        util::pagination::{paginated, PageLinkBase, PageParams},
    },
};

/// Tag for grouping game analytics endpoints in OpenAPI documentation
pub static MISC_TAG: &str = "misc";

const MISC_COLLECTION: &str = "games_misc";

/// Analytics metadata of every game, newest first.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/misc",
    tag = MISC_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of analytics entries", body = PaginatedDto<MiscGameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_misc_list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let (entries, total) = MiscService::new(&state.db).list(&params).await?;

    Ok((
        StatusCode::OK,
        Json(paginated(entries, &PageLinkBase::from_uri(&uri), &params, total)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/games/misc/{appid}",
    tag = MISC_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Analytics entry", body = MiscGameDto),
        (status = 404, description = "Misc entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_misc(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let entry = MiscService::new(&state.db).get(appid).await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// Insert or replace a game's analytics metadata.
///
/// A missing game is created, which requires a name.
///
/// # Access Control
/// - `Admin` - Only admins can write analytics metadata
///
/// # Returns
/// - `201 Created` - Game created
/// - `200 OK` - Existing game updated
#[utoipa::path(
    post,
    path = "/api/v1.0/games/misc",
    tag = MISC_TAG,
    request_body = UpsertMiscDto,
    responses(
        (status = 201, description = "Game created", body = MiscGameDto),
        (status = 200, description = "Game updated", body = MiscGameDto),
        (status = 400, description = "Name is required for new games", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn upsert_misc(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Json(payload): Json<UpsertMiscDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_admin(&state, &headers, &session).await?;
    let meta = RequestMeta::new(headers, method, uri);
    let details = serde_json::to_value(&payload)?;

    let (entry, created) = MiscService::new(&state.db)
        .upsert(payload, &user.username)
        .await?;

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(Some(&user)),
            if created {
                LogAction::Create
            } else {
                LogAction::Update
            },
            MISC_COLLECTION,
            entry.appid,
            details,
            LogStatus::Success,
        )
        .await;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(entry)))
}

/// Update part of a game's analytics metadata.
///
/// # Access Control
/// - `Admin` - Only admins can write analytics metadata
#[utoipa::path(
    put,
    path = "/api/v1.0/games/misc/{appid}",
    tag = MISC_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    request_body = UpdateMiscDto,
    responses(
        (status = 200, description = "Entry updated", body = MiscGameDto),
        (status = 400, description = "No fields to update", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Misc entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_misc(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Path(appid): Path<i64>,
    Json(payload): Json<UpdateMiscDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_admin(&state, &headers, &session).await?;
    let meta = RequestMeta::new(headers, method, uri);
    let details = serde_json::to_value(&payload)?;

    let entry = MiscService::new(&state.db)
        .update(appid, payload, &user.username)
        .await?;

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(Some(&user)),
            LogAction::Update,
            MISC_COLLECTION,
            appid,
            details,
            LogStatus::Success,
        )
        .await;

    Ok((StatusCode::OK, Json(entry)))
}

/// Clear a game's genres, tags and languages and reset its peak CCU.
///
/// # Access Control
/// - `Admin` - Only admins can write analytics metadata
#[utoipa::path(
    delete,
    path = "/api/v1.0/games/misc/{appid}",
    tag = MISC_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Entry cleared", body = MiscGameDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Misc entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn clear_misc(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_admin(&state, &headers, &session).await?;
    let meta = RequestMeta::new(headers, method, uri);

    let entry = MiscService::new(&state.db)
        .clear(appid, &user.username)
        .await?;

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(Some(&user)),
            LogAction::Delete,
            MISC_COLLECTION,
            appid,
            serde_json::json!({ "cleared": ["genres", "tags", "supported_languages", "peak_ccu"] }),
            LogStatus::Success,
        )
        .await;

    Ok((StatusCode::OK, Json(entry)))
}
