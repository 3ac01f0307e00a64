use axum::{
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        developer::{DeleteDeveloperDto, DeveloperDto, GameDevelopersDto, RenameDeveloperDto},
    },
    server::{
        controller::{require_admin, RequestMeta},
        error::AppError,
        model::action_log::{LogAction, LogStatus},
        service::{action_log::ActionLogService, developer::DeveloperService},
        state::AppState,
    },
};

/// Tag for grouping developer endpoints in OpenAPI documentation
pub static DEVELOPER_TAG: &str = "developer";

const DEVELOPERS_COLLECTION: &str = "developers";

/// Every developer with the games they made, sorted by name.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/developers",
    tag = DEVELOPER_TAG,
    responses(
        (status = 200, description = "Developers and their games", body = Vec<DeveloperDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_developers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let developers = DeveloperService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(developers)))
}

/// Developers, publishers and links of one game.
#[utoipa::path(
    get,
    path = "/api/v1.0/games/{appid}/developers",
    tag = DEVELOPER_TAG,
    params(("appid" = i64, Path, description = "Steam appid")),
    responses(
        (status = 200, description = "Game companies", body = GameDevelopersDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_developers(
    State(state): State<AppState>,
    Path(appid): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let developers = DeveloperService::new(&state.db).for_game(appid).await?;

    Ok((StatusCode::OK, Json(developers)))
}

/// Rename a developer across every game.
///
/// # Access Control
/// - `Admin` - Only admins can rename developers
#[utoipa::path(
    post,
    path = "/api/v1.0/games/developers/rename",
    tag = DEVELOPER_TAG,
    request_body = RenameDeveloperDto,
    responses(
        (status = 200, description = "Developer renamed", body = MessageDto),
        (status = 400, description = "Both names are required", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn rename_developer(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Json(payload): Json<RenameDeveloperDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_admin(&state, &headers, &session).await?;
    let meta = RequestMeta::new(headers, method, uri);

    let updated = DeveloperService::new(&state.db)
        .rename(&payload.old_name, &payload.new_name)
        .await?;

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(Some(&user)),
            LogAction::RenameDeveloper,
            DEVELOPERS_COLLECTION,
            payload.old_name.trim(),
            json!({
                "old_name": payload.old_name.trim(),
                "new_name": payload.new_name.trim(),
                "games_updated": updated,
            }),
            LogStatus::Success,
        )
        .await;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "Renamed {} to {} in {} games.",
            payload.old_name.trim(),
            payload.new_name.trim(),
            updated
        ))),
    ))
}

/// Remove a developer from every game.
///
/// # Access Control
/// - `Admin` - Only admins can delete developers
#[utoipa::path(
    post,
    path = "/api/v1.0/games/developers/delete",
    tag = DEVELOPER_TAG,
    request_body = DeleteDeveloperDto,
    responses(
        (status = 200, description = "Developer removed", body = MessageDto),
        (status = 400, description = "Developer name is required", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_developer(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    Json(payload): Json<DeleteDeveloperDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_admin(&state, &headers, &session).await?;
    let meta = RequestMeta::new(headers, method, uri);

    let updated = DeveloperService::new(&state.db)
        .delete(&payload.name)
        .await?;

    ActionLogService::new(&state.db)
        .record(
            &meta.audit(Some(&user)),
            LogAction::DeleteDeveloper,
            DEVELOPERS_COLLECTION,
            payload.name.trim(),
            json!({ "name": payload.name.trim(), "games_updated": updated }),
            LogStatus::Success,
        )
        .await;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "Deleted {} from {} games.",
            payload.name.trim(),
            updated
        ))),
    ))
}
