use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request},
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        user::{LoginDto, RegisterDto, TokenDto},
    },
};

pub async fn login(payload: &LoginDto) -> Result<TokenDto, ApiError> {
    let request = post("/api/v1.0/auth/login").json(payload)?;
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn register(payload: &RegisterDto) -> Result<MessageDto, ApiError> {
    let request = post("/api/v1.0/auth/register").json(payload)?;
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Swap the identity-provider session for a bearer token.
pub async fn session_token() -> Result<TokenDto, ApiError> {
    let response = send_request(get("/api/v1.0/auth/token")).await?;
    parse_response(response).await
}
