use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        action_log::ActionLogDto,
        api::{ErrorDto, PaginatedDto},
        review::AdminReviewsDto,
    },
    server::{
        controller::require_admin,
        error::AppError,
        service::{
            action_log::ActionLogService,
            review::{ReviewService, DEFAULT_ADMIN_PAGE_SIZE},
        },
        state::AppState,
        util::pagination::{paginated, PageLinkBase, PageParams},
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminReviewsQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Reviews per page (default: 20)
    pub per_page: Option<u64>,
    /// Matches username, comment or game name, case-insensitively
    pub search: Option<String>,
}

/// Audit log, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can read the audit log
#[utoipa::path(
    get,
    path = "/api/v1.0/admin/logs",
    tag = ADMIN_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of audit entries", body = PaginatedDto<ActionLogDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_action_logs(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_admin(&state, &headers, &session).await?;

    let (logs, total) = ActionLogService::new(&state.db).list(&params).await?;

    Ok((
        StatusCode::OK,
        Json(paginated(logs, &PageLinkBase::from_uri(&uri), &params, total)),
    ))
}

/// Every review across the catalog with optional search.
///
/// # Access Control
/// - `Admin` - Only admins can moderate reviews
#[utoipa::path(
    get,
    path = "/api/v1.0/admin/reviews",
    tag = ADMIN_TAG,
    params(AdminReviewsQuery),
    responses(
        (status = 200, description = "Page of reviews", body = AdminReviewsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_admin_reviews(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(query): Query<AdminReviewsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_admin(&state, &headers, &session).await?;

    let reviews = ReviewService::new(&state.db)
        .admin_list(
            query.search.as_deref(),
            query.page.unwrap_or(1),
            query.per_page.unwrap_or(DEFAULT_ADMIN_PAGE_SIZE),
        )
        .await?;

    Ok((StatusCode::OK, Json(reviews)))
}
