//! Async API client core for the data-items service.
//!
//! # Overview
//! Wraps the three REST calls the backend exposes — list, submit, process —
//! behind [`ItemsClient`], decoding JSON bodies into the [`Item`] model and
//! normalizing every failure into the closed [`ApiError`] taxonomy. There is
//! no caching, retrying, or request coordination: each call is one awaited
//! round-trip, and the caller decides what to do with a failure.
//!
//! # Design
//! - `ItemsClient` holds immutable configuration (base URL) plus a shared
//!   `reqwest::Client` session; concurrent calls are independent.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//! - URL construction is validated up front, so a bad base URL fails before
//!   any request is sent.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ItemsClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::{Item, ProcessingStatus};
