//! Handler errors and their JSON error bodies (`{"error": ...}`).

pub mod auth;
pub mod config;
pub mod internal;
pub mod steam;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, steam::SteamError,
    },
};

/// Everything a handler can fail with.
///
/// `AuthError` and `SteamError` carry their own status codes. `NotFound` and
/// `BadRequest` surface their message to the caller; every other variant becomes a
/// logged 500 with a generic body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// 401/403/400 depending on the variant.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// 502/503/504 from the storefront proxy.
    #[error(transparent)]
    SteamErr(#[from] SteamError),

    /// Stored data that no longer parses (list columns, ids).
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Outbound HTTP outside the Steam proxy, e.g. the identity-provider userinfo call.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    #[error(transparent)]
    RegexErr(#[from] regex::Error),

    /// Seed file reads at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Logged in full, returned as "Internal server error".
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for the 404 returned whenever an appid has no game row.
    pub fn game_not_found() -> Self {
        AppError::NotFound("Game not found".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::SteamErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs any displayable error and answers with a generic 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
