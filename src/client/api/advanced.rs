use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::advanced::{SentimentGameDto, TopGameDto, TopMetric, ValueGameDto},
};

pub async fn get_top(metric: TopMetric, limit: u64) -> Result<Vec<TopGameDto>, ApiError> {
    let url = format!(
        "/api/v1.0/games/advanced/top?metric={}&limit={}",
        metric.as_str(),
        limit
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_sentiment(limit: u64) -> Result<Vec<SentimentGameDto>, ApiError> {
    let url = format!("/api/v1.0/games/advanced/sentiment?limit={}", limit);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_value(limit: u64) -> Result<Vec<ValueGameDto>, ApiError> {
    let url = format!("/api/v1.0/games/advanced/value?limit={}", limit);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
