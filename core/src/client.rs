//! Async HTTP client for the data-items API.
//!
//! # Design
//! `ItemsClient` holds only immutable configuration (the parsed base URL) and
//! a `reqwest::Client`, which pools connections and is safe for concurrent
//! use. Each operation is a single awaited round-trip: build the URL, send,
//! check the status against the one success code the endpoint allows, decode
//! the body. No retries, no caching, no request coalescing; cancellation of
//! the enclosing task aborts the in-flight request.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;
use crate::types::Item;

/// Base URL used by local development setups of the backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Asynchronous client for the data-items API.
///
/// Cheap to clone; clones share the underlying connection pool. Concurrent
/// calls on the same client are independent of each other.
#[derive(Debug, Clone)]
pub struct ItemsClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ItemsClient {
    /// Create a client for `base_url` with a fresh transport session.
    ///
    /// A trailing `/` on `base_url` is stripped; a base URL that does not
    /// parse fails fast with [`ApiError::InvalidUrl`] before any network
    /// activity.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`, for sharing a
    /// connection pool or injecting a preconfigured transport in tests.
    pub fn with_client(base_url: &str, http: reqwest::Client) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url.trim_end_matches('/')).map_err(|_| ApiError::InvalidUrl)?;
        Ok(Self { base_url, http })
    }

    /// `GET /data` — fetch every item known to the backend.
    ///
    /// Succeeds only on HTTP 200.
    pub async fn fetch_all(&self) -> Result<Vec<Item>, ApiError> {
        let url = self.endpoint(&["data"])?;
        tracing::debug!(%url, "fetching all items");
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let body = expect_status(response, StatusCode::OK).await?;
        decode_body(&body)
    }

    /// `POST /data` — submit a new item.
    ///
    /// Succeeds only on HTTP 201 and returns the server's canonical
    /// representation of the created item; the server may assign or override
    /// fields, so the response — not the input — is authoritative.
    pub async fn submit(&self, item: &Item) -> Result<Item, ApiError> {
        let url = self.endpoint(&["data"])?;
        tracing::debug!(%url, id = %item.id, "submitting item");
        let response = self
            .http
            .post(url)
            .json(item)
            .send()
            .await
            .map_err(transport_error)?;
        let body = expect_status(response, StatusCode::CREATED).await?;
        decode_body(&body)
    }

    /// `POST /data/{id}/process` — ask the backend to start processing an
    /// item, returning its updated representation.
    ///
    /// Succeeds only on HTTP 200. The id is percent-encoded into its path
    /// segment, never truncated.
    pub async fn process(&self, id: Uuid) -> Result<Item, ApiError> {
        let url = self.endpoint(&["data", &id.to_string(), "process"])?;
        tracing::debug!(%url, %id, "requesting processing");
        let response = self.http.post(url).send().await.map_err(transport_error)?;
        let body = expect_status(response, StatusCode::OK).await?;
        decode_body(&body)
    }

    /// Append path segments to the base URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Fail unless the response carries the one status code the operation
/// accepts; otherwise read the body for decoding.
async fn expect_status(
    response: reqwest::Response,
    expected: StatusCode,
) -> Result<String, ApiError> {
    let status = response.status();
    if status != expected {
        tracing::debug!(status = status.as_u16(), "unexpected response status");
        return Err(ApiError::ServerError(status.as_u16()));
    }
    response.text().await.map_err(transport_error)
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body)
        .map_err(|e| ApiError::NetworkError(format!("decoding response body failed: {e}")))
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::NetworkError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ItemsClient {
        ItemsClient::new(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn endpoint_appends_path_to_base() {
        let url = client().endpoint(&["data"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/data");
    }

    #[test]
    fn endpoint_builds_process_path() {
        let id = Uuid::nil().to_string();
        let url = client().endpoint(&["data", &id, "process"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/data/00000000-0000-0000-0000-000000000000/process"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ItemsClient::new("http://localhost:8000/api/").unwrap();
        let url = client.endpoint(&["data"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/data");
    }

    #[test]
    fn bare_host_base_gets_single_separator() {
        let client = ItemsClient::new("http://localhost:8000").unwrap();
        let url = client.endpoint(&["data"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/data");
    }

    #[test]
    fn reserved_characters_are_escaped_into_the_path() {
        let url = client().endpoint(&["data", "a b/c?d", "process"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/data/a%20b%2Fc%3Fd/process"
        );
    }

    #[test]
    fn malformed_base_url_is_rejected_at_construction() {
        let err = ItemsClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl));
    }

    #[test]
    fn non_base_url_fails_on_endpoint_building() {
        // parses as a URL but cannot carry path segments
        let client = ItemsClient::new("mailto:user@example.com").unwrap();
        let err = client.endpoint(&["data"]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl));
    }
}
