//! Thin request helpers over `gloo-net`.
//!
//! Every call resolves the base URL through `shared::config` and maps
//! failures into [`ApiError`]. There are no retries, timeouts or in-flight
//! deduplication; a failed call surfaces immediately to the caller.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::api_url;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, ...).
    #[error("errore di rete: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("risposta HTTP {code}")]
    Status { code: u16 },
    /// The response body could not be decoded.
    #[error("risposta non valida: {0}")]
    Decode(String),
}

impl ApiError {
    /// Destructive calls the backend rejects because the entity is still
    /// referenced come back as client-error statuses.
    pub fn is_constraint(&self) -> bool {
        matches!(self, ApiError::Status { code } if (400..500).contains(code))
    }
}

fn status_checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            code: response.status(),
        })
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    status_checked(response)?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_json(response).await
}

/// POST with a JSON body, decoding a JSON response (used by login).
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_json(response).await
}

/// POST with a JSON body, ignoring the response body. Mutations refetch the
/// whole collection afterwards, so whatever the backend echoes is unused.
pub async fn post_command<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    status_checked(response).map(|_| ())
}

pub async fn put_command<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    status_checked(response).map(|_| ())
}

pub async fn patch_command<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::patch(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    status_checked(response).map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    status_checked(response).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn client_error_statuses_count_as_constraint_rejections() {
        assert!(ApiError::Status { code: 409 }.is_constraint());
        assert!(ApiError::Status { code: 400 }.is_constraint());
        assert!(!ApiError::Status { code: 500 }.is_constraint());
        assert!(!ApiError::Transport("offline".into()).is_constraint());
    }
}
