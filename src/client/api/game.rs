use crate::{
    client::{
        api::helper::{delete, get, parse_response, post, put, send_request, with_query},
        model::error::ApiError,
    },
    model::{
        api::{MessageDto, PaginatedDto},
        game::{
            CreateGameDto, EnrichedGameDto, GameCreatedDto, GameDetailDto, GameFilterQuery,
            GameSort, GameSummaryDto, UpdateGameDto,
        },
    },
};

pub async fn get_games(
    page: u64,
    per_page: u64,
    sort: GameSort,
) -> Result<PaginatedDto<GameSummaryDto>, ApiError> {
    let url = format!(
        "/api/v1.0/games?pn={}&ps={}&sort={}",
        page,
        per_page,
        sort.as_str()
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_game(appid: i64) -> Result<GameDetailDto, ApiError> {
    let url = format!("/api/v1.0/games/{}", appid);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_enriched_game(appid: i64) -> Result<EnrichedGameDto, ApiError> {
    let url = format!("/api/v1.0/games/{}/enriched", appid);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn filter_games(
    query: &GameFilterQuery,
) -> Result<PaginatedDto<GameSummaryDto>, ApiError> {
    let url = with_query("/api/v1.0/games/filter", &query.pairs());
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_game(payload: &CreateGameDto) -> Result<GameCreatedDto, ApiError> {
    let request = post("/api/v1.0/games").json(payload)?;
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_game(appid: i64, payload: &UpdateGameDto) -> Result<GameDetailDto, ApiError> {
    let url = format!("/api/v1.0/games/{}", appid);
    let request = put(&url).json(payload)?;
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_game(appid: i64) -> Result<MessageDto, ApiError> {
    let url = format!("/api/v1.0/games/{}", appid);
    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}
