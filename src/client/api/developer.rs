use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request},
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        developer::{DeleteDeveloperDto, DeveloperDto, GameDevelopersDto, RenameDeveloperDto},
    },
};

pub async fn get_developers() -> Result<Vec<DeveloperDto>, ApiError> {
    let response = send_request(get("/api/v1.0/games/developers")).await?;
    parse_response(response).await
}

pub async fn get_game_developers(appid: i64) -> Result<GameDevelopersDto, ApiError> {
    let url = format!("/api/v1.0/games/{}/developers", appid);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn rename_developer(payload: &RenameDeveloperDto) -> Result<MessageDto, ApiError> {
    let request = post("/api/v1.0/games/developers/rename").json(payload)?;
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_developer(payload: &DeleteDeveloperDto) -> Result<MessageDto, ApiError> {
    let request = post("/api/v1.0/games/developers/delete").json(payload)?;
    let response = send_request(request).await?;
    parse_response(response).await
}
