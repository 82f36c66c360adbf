//! Error types for the data-items API client.
//!
//! # Design
//! A closed four-variant taxonomy. `ServerError` carries the raw status code
//! so callers can render "server error 404" style messages; everything that
//! is not a URL, protocol, or status problem — connect failures, timeouts,
//! body encode/decode failures — lands in `NetworkError` with a descriptive
//! message. Nothing is retried or swallowed inside the client.

use std::fmt;

/// Errors returned by [`crate::ItemsClient`] operations.
#[derive(Debug)]
pub enum ApiError {
    /// The base URL, or base URL plus path segments, does not form a valid
    /// request URL. Raised before any network activity.
    InvalidUrl,

    /// The transport produced a reply that cannot be interpreted as an HTTP
    /// response.
    InvalidResponse,

    /// An HTTP response arrived, but its status is not the expected success
    /// code for the operation.
    ServerError(u16),

    /// Any other failure: connection, timeout, request encode, response
    /// decode. The message is always non-empty.
    NetworkError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl => write!(f, "invalid URL"),
            ApiError::InvalidResponse => write!(f, "invalid response from server"),
            ApiError::ServerError(status) => {
                write!(f, "server error with status {status}")
            }
            ApiError::NetworkError(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
