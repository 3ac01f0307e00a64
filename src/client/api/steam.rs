use serde_json::Value;

use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::steam::{parse_screenshots, parse_trailers, AchievementDto, ScreenshotDto, TrailerDto},
};

pub async fn get_screenshots(appid: i64) -> Result<Vec<ScreenshotDto>, ApiError> {
    let url = format!("/api/steam/{}/screenshots", appid);
    let response = send_request(get(&url)).await?;
    let details: Value = parse_response(response).await?;
    Ok(parse_screenshots(&details, appid))
}

pub async fn get_trailers(appid: i64) -> Result<Vec<TrailerDto>, ApiError> {
    let url = format!("/api/steam/{}/trailers", appid);
    let response = send_request(get(&url)).await?;
    let details: Value = parse_response(response).await?;
    Ok(parse_trailers(&details, appid))
}

pub async fn get_merged_achievements(appid: i64) -> Result<Vec<AchievementDto>, ApiError> {
    let url = format!("/api/steam/{}/achievements/merged", appid);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
