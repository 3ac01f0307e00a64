use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures talking to the Steam storefront and Web API.
#[derive(Error, Debug)]
pub enum SteamError {
    /// Storefront answered but reported `success: false` or returned no data.
    #[error("api_fetch_failed")]
    FetchFailed(i64),

    /// Upstream request did not complete within the client timeout.
    #[error("api_request_timeout")]
    Timeout,

    /// Transport error or unexpected status from upstream.
    #[error("api_request_failed")]
    RequestFailed(String),

    /// Endpoint needs `STEAM_API_KEY` which is not configured.
    #[error("steam_api_key_missing")]
    ApiKeyMissing,
}

impl From<reqwest::Error> for SteamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SteamError::Timeout
        } else {
            SteamError::RequestFailed(err.to_string())
        }
    }
}

/// Maps upstream failures to gateway status codes.
///
/// The error body carries the short machine-readable code the client switches on.
impl IntoResponse for SteamError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::FetchFailed(appid) => {
                tracing::warn!("Steam returned no data for app {}", appid);
                StatusCode::BAD_GATEWAY
            }
            Self::Timeout => {
                tracing::warn!("Steam request timed out");
                StatusCode::GATEWAY_TIMEOUT
            }
            Self::RequestFailed(reason) => {
                tracing::warn!("Steam request failed: {}", reason);
                StatusCode::BAD_GATEWAY
            }
            Self::ApiKeyMissing => StatusCode::SERVICE_UNAVAILABLE,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
