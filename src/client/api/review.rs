use crate::{
    client::{
        api::helper::{delete, get, parse_response, post, put, send_request},
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        review::{
            CreateReviewDto, FilteredReviewsDto, RecentReviewsDto, ReviewCreatedDto, ReviewDto,
            ReviewFilter, ReviewSort, ReviewStatsDto, UpdateReviewDto,
        },
    },
};

pub async fn get_filtered_reviews(
    appid: i64,
    filter: ReviewFilter,
    sort: ReviewSort,
) -> Result<FilteredReviewsDto, ApiError> {
    let url = format!(
        "/api/v1.0/games/{}/reviews/filtered?filter={}&sort={}",
        appid,
        filter.as_str(),
        sort.as_str()
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_review_stats(appid: i64) -> Result<ReviewStatsDto, ApiError> {
    let url = format!("/api/v1.0/games/{}/reviews/stats", appid);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_recent_reviews(limit: u64) -> Result<RecentReviewsDto, ApiError> {
    let url = format!("/api/v1.0/reviews/recent?limit={}", limit);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_review(
    appid: i64,
    payload: &CreateReviewDto,
) -> Result<ReviewCreatedDto, ApiError> {
    let url = format!("/api/v1.0/games/{}/reviews", appid);
    let request = post(&url).json(payload)?;
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_review(
    appid: i64,
    id: i32,
    payload: &UpdateReviewDto,
) -> Result<ReviewDto, ApiError> {
    let url = format!("/api/v1.0/games/{}/reviews/{}", appid, id);
    let request = put(&url).json(payload)?;
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_review(appid: i64, id: i32) -> Result<MessageDto, ApiError> {
    let url = format!("/api/v1.0/games/{}/reviews/{}", appid, id);
    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}
