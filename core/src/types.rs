//! Domain model for the data-items API.
//!
//! # Design
//! These types mirror the backend's wire schema but are defined independently
//! from the mock-server crate; integration tests catch schema drift. `status`
//! and `is_processing` are separate fields on the wire and stay separate here —
//! neither is derived from the other, even though that permits odd combinations
//! such as a failed item still flagged as processing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle label for an [`Item`]. Closed set — the server never sends
/// anything outside these four literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// A single unit of work tracked by the backend.
///
/// Values are never mutated in place: state transitions arrive as fresh
/// `Item` values decoded from server responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Absent until the server stamps the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub status: ProcessingStatus,
    /// In-flight marker, independent of `status`.
    pub is_processing: bool,
}

impl Item {
    /// A not-yet-submitted item: fresh id, no timestamp, pending, idle.
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            timestamp: None,
            status: ProcessingStatus::Pending,
            is_processing: false,
        }
    }
}
