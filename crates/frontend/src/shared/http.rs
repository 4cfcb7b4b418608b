//! JSON over HTTP with gloo-net. Every failure becomes a [`NetworkError`].

use contracts::shared::error::NetworkError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, NetworkError> {
    let url = api_url(path);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| NetworkError::Transport(e.to_string()))?;

    read_json(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, NetworkError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| NetworkError::Transport(format!("failed to encode request: {}", e)))?
        .send()
        .await
        .map_err(|e| NetworkError::Transport(e.to_string()))?;

    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, NetworkError> {
    if !response.ok() {
        return Err(NetworkError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| NetworkError::Decode(e.to_string()))
}
