//! API utilities for frontend-backend communication
//!
//! Every call goes through [`send`]: bearer token from session storage,
//! `{success, data}` envelope unwrapped, failures mapped to [`ApiError`].

use contracts::domain::common::Resource;
use contracts::shared::api::{ApiEnvelope, ApiError, ErrorKind};
use gloo_net::http::{Request, Response};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::system::auth::storage;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Base URL, fixed at compile time via `VITE_API_URL`
static API_BASE: Lazy<String> = Lazy::new(|| resolve_api_base(option_env!("VITE_API_URL")));

/// Configured base without a trailing slash; unset or blank means the default.
fn resolve_api_base(configured: Option<&str>) -> String {
    configured
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim()
        .trim_end_matches('/')
        .to_string()
}

/// Get the base URL for API requests
pub fn api_base() -> &'static str {
    API_BASE.as_str()
}

/// Build a full API URL from a path like `/tickets`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Same as [`api_url`] with a query string serialized by `serde_qs`.
pub fn api_url_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let query = serde_qs::to_string(query)
        .map_err(|e| ApiError::new(ErrorKind::Unknown, format!("Failed to encode query: {}", e)))?;
    if query.is_empty() {
        Ok(api_url(path))
    } else {
        Ok(format!("{}?{}", api_url(path), query))
    }
}

fn bearer() -> Result<String, ApiError> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(ApiError::not_authenticated)
}

/// Read status and envelope; non-2xx responses become errors.
async fn read_envelope(response: Response) -> Result<(u16, ApiEnvelope), ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::network(format!("Failed to read response: {}", e)))?;

    if !ok {
        return Err(ApiError::from_status(status, &body));
    }
    if body.trim().is_empty() {
        return Ok((status, ApiEnvelope::acknowledged()));
    }

    let envelope = serde_json::from_str::<ApiEnvelope>(&body)
        .map_err(|e| ApiError::parse(e.to_string()))?;
    Ok((status, envelope))
}

/// Sends a prepared request and unwraps the envelope.
pub async fn send(request: Result<Request, gloo_net::Error>) -> Result<(u16, ApiEnvelope), ApiError> {
    let request = request
        .map_err(|e| ApiError::new(ErrorKind::Unknown, format!("Failed to build request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
    read_envelope(response).await
}

/// GET with bearer token
pub async fn get_authorized(url: &str) -> Result<(u16, ApiEnvelope), ApiError> {
    let auth = bearer()?;
    send(Request::get(url).header("Authorization", &auth).build()).await
}

/// Fetch the whole collection of a resource.
pub async fn fetch_list<T: Resource>() -> Result<Vec<T>, ApiError> {
    fetch_list_at::<T>(&api_url(T::collection_path())).await
}

/// Fetch a collection with server-side query parameters.
pub async fn fetch_list_with<T: Resource, Q: Serialize>(query: &Q) -> Result<Vec<T>, ApiError> {
    let url = api_url_with_query(T::collection_path(), query)?;
    fetch_list_at::<T>(&url).await
}

/// Fetch a collection from an explicit URL (nested routes).
pub async fn fetch_list_at<T: Resource>(url: &str) -> Result<Vec<T>, ApiError> {
    let (status, envelope) = get_authorized(url).await?;
    envelope.into_list(status, T::list_key())
}

/// Single record by id
pub async fn fetch_item<T: Resource>(id: &str) -> Result<T, ApiError> {
    let (status, envelope) = get_authorized(&api_url(&T::item_path(id))).await?;
    envelope.into_item(status, T::item_key())
}

/// POST to the collection. The list is refetched afterwards, so only the
/// acknowledgement matters.
pub async fn create_item<T: Resource, B: Serialize>(body: &B) -> Result<(), ApiError> {
    let auth = bearer()?;
    let url = api_url(T::collection_path());
    let (status, envelope) = send(Request::post(&url).header("Authorization", &auth).json(body)).await?;
    envelope.into_ack(status)
}

pub async fn update_item<T: Resource, B: Serialize>(id: &str, body: &B) -> Result<(), ApiError> {
    let auth = bearer()?;
    let url = api_url(&T::item_path(id));
    let (status, envelope) = send(Request::put(&url).header("Authorization", &auth).json(body)).await?;
    envelope.into_ack(status)
}

pub async fn delete_item<T: Resource>(id: &str) -> Result<(), ApiError> {
    let auth = bearer()?;
    let url = api_url(&T::item_path(id));
    let (status, envelope) = send(Request::delete(&url).header("Authorization", &auth).build()).await?;
    envelope.into_ack(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_defaults_when_unset_or_blank() {
        assert_eq!(resolve_api_base(None), "http://localhost:5000/api");
        assert_eq!(resolve_api_base(Some("  ")), "http://localhost:5000/api");
    }

    #[test]
    fn test_api_base_drops_trailing_slash() {
        assert_eq!(
            resolve_api_base(Some("https://time.example.com/api/")),
            "https://time.example.com/api"
        );
    }
}
