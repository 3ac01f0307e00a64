use crate::{
    client::{
        api::helper::{delete, get, parse_response, send_request},
        model::error::ApiError,
    },
    model::{api::PaginatedDto, misc::MiscGameDto},
};

pub async fn get_misc_list(page: u64, per_page: u64) -> Result<PaginatedDto<MiscGameDto>, ApiError> {
    let url = format!("/api/v1.0/games/misc?pn={}&ps={}", page, per_page);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Empties the analytics fields of a game.
pub async fn clear_misc(appid: i64) -> Result<MiscGameDto, ApiError> {
    let url = format!("/api/v1.0/games/misc/{}", appid);
    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}
