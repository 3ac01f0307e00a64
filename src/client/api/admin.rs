use crate::{
    client::{
        api::helper::{get, parse_response, send_request, with_query},
        model::error::ApiError,
    },
    model::{
        action_log::ActionLogDto,
        api::PaginatedDto,
        review::AdminReviewsDto,
    },
};

pub async fn get_admin_reviews(
    page: u64,
    per_page: u64,
    search: &str,
) -> Result<AdminReviewsDto, ApiError> {
    let mut pairs = vec![("page", page.to_string()), ("per_page", per_page.to_string())];
    if !search.trim().is_empty() {
        pairs.push(("search", search.trim().to_string()));
    }
    let url = with_query("/api/v1.0/admin/reviews", &pairs);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_action_logs(
    page: u64,
    per_page: u64,
) -> Result<PaginatedDto<ActionLogDto>, ApiError> {
    let url = format!("/api/v1.0/admin/logs?pn={}&ps={}", page, per_page);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
