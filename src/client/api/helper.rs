use dioxus_logger::tracing;
use reqwasm::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::model::{error::ApiError, token},
    model::api::ErrorDto,
};

/// A request together with what is needed to log it once it completes.
pub struct ApiRequest {
    method: &'static str,
    url: String,
    inner: Request,
}

impl ApiRequest {
    fn new(method: &'static str, url: &str, inner: Request) -> Self {
        // Attach the stored bearer token, if any
        let inner = match token::load() {
            Some(token) => inner.header("Authorization", &format!("Bearer {}", token)),
            None => inner,
        };

        Self {
            method,
            url: url.to_string(),
            inner,
        }
    }

    /// Serialize `payload` as the JSON body.
    pub fn json<T: Serialize>(self, payload: &T) -> Result<Self, ApiError> {
        let body = serialize_json(payload)?;

        Ok(Self {
            inner: self.inner.body(body),
            ..self
        })
    }
}

async fn error_message(response: Response) -> String {
    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    }
}

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(ApiError {
            status,
            message: error_message(response).await,
        })
    }
}

/// Helper function for success responses whose body is not needed
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError {
            status,
            message: error_message(response).await,
        })
    }
}

pub fn get(url: &str) -> ApiRequest {
    ApiRequest::new(
        "GET",
        url,
        Request::get(url).credentials(reqwasm::http::RequestCredentials::Include),
    )
}

pub fn post(url: &str) -> ApiRequest {
    ApiRequest::new(
        "POST",
        url,
        Request::post(url)
            .credentials(reqwasm::http::RequestCredentials::Include)
            .header("Content-Type", "application/json"),
    )
}

pub fn put(url: &str) -> ApiRequest {
    ApiRequest::new(
        "PUT",
        url,
        Request::put(url)
            .credentials(reqwasm::http::RequestCredentials::Include)
            .header("Content-Type", "application/json"),
    )
}

pub fn delete(url: &str) -> ApiRequest {
    ApiRequest::new(
        "DELETE",
        url,
        Request::delete(url).credentials(reqwasm::http::RequestCredentials::Include),
    )
}

fn now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}

/// Send a request, log its timing and handle common errors.
///
/// A 401 drops the stored token so the next render treats the user as signed out.
pub async fn send_request(request: ApiRequest) -> Result<Response, ApiError> {
    let ApiRequest { method, url, inner } = request;
    let started = now_ms();

    let response = inner.send().await.map_err(|e| {
        tracing::error!("{} {} failed: {}", method, url, e);
        ApiError {
            status: 500,
            message: format!("Failed to send request: {}", e),
        }
    })?;

    let status = response.status();
    let elapsed = match (started, now_ms()) {
        (Some(start), Some(end)) => end - start,
        _ => 0.0,
    };
    tracing::info!("{} {} {} in {:.0}ms", method, url, status, elapsed);
    if let Some(timing) = response.headers().get("Server-Timing") {
        tracing::info!("Server-Timing for {}: {}", url, timing);
    }

    match status {
        401 => {
            token::clear();
            tracing::warn!("{} {} unauthorized, cleared stored token", method, url);
        }
        400..=499 => tracing::warn!("{} {} returned {}", method, url, status),
        500..=599 => tracing::error!("{} {} returned {}", method, url, status),
        _ => (),
    }

    Ok(response)
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}

/// Percent-encode a query value.
pub fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Builds `path?k=v&...` from encoded pairs, omitting the `?` when there are none.
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}
