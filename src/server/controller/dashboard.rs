use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardStatsDto},
    server::{error::AppError, service::dashboard::DashboardService, state::AppState},
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Headline numbers for the home page.
#[utoipa::path(
    get,
    path = "/api/v1.0/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = DashboardService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}
