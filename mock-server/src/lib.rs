//! In-memory mock of the data-items backend, for integration tests and
//! manual poking.
//!
//! # Design
//! Implements the same HTTP contract as the real backend: an ordered list of
//! items, creation with server-assigned fields, and a process endpoint that
//! flips an item to `processing` immediately and completes it in the
//! background after a configurable delay. DTOs are defined independently
//! from the core crate; integration tests catch schema drift.

use std::{io, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// How long a processed item stays in `processing` before the background
/// task completes it. Matches the real backend's default.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(5);

/// Lifecycle label for an item.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// A single item as stored and served by the mock backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub status: ProcessingStatus,
    pub is_processing: bool,
}

/// Create payload. Clients may post a full item; everything beyond `title`
/// and `description` is ignored and server-assigned.
#[derive(Deserialize)]
pub struct CreateItem {
    pub title: String,
    pub description: String,
}

/// Ordered in-memory store, like the real backend's list.
pub type Db = Arc<RwLock<Vec<Item>>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    processing_delay: Duration,
}

/// The three illustrative items the real backend seeds at startup.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item {
            id: Uuid::new_v4(),
            title: "Sample Task 1".to_string(),
            description: "This is a sample task that demonstrates the app functionality"
                .to_string(),
            timestamp: Some(Utc::now()),
            status: ProcessingStatus::Completed,
            is_processing: false,
        },
        Item {
            id: Uuid::new_v4(),
            title: "Processing Task".to_string(),
            description: "This task is currently being processed by the backend".to_string(),
            timestamp: Some(Utc::now()),
            status: ProcessingStatus::Processing,
            is_processing: true,
        },
        Item {
            id: Uuid::new_v4(),
            title: "Pending Task".to_string(),
            description: "This task is waiting to be processed".to_string(),
            timestamp: Some(Utc::now()),
            status: ProcessingStatus::Pending,
            is_processing: false,
        },
    ]
}

/// Router over an empty store with the default processing delay.
pub fn app() -> Router {
    app_with(Vec::new(), DEFAULT_PROCESSING_DELAY)
}

/// Router over a pre-seeded store with a chosen processing delay. Tests use
/// a short delay to observe background completion.
pub fn app_with(items: Vec<Item>, processing_delay: Duration) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(items)),
        processing_delay,
    };
    Router::new()
        .route("/api/data", get(list_items).post(create_item))
        .route("/api/data/{id}", get(get_item).delete(delete_item))
        .route("/api/data/{id}/process", post(process_item))
        .route("/api/health", get(health))
        .with_state(state)
}

/// Serve the seeded sample store, like the real backend at startup.
pub async fn run(listener: TcpListener) -> Result<(), io::Error> {
    run_with(listener, sample_items(), DEFAULT_PROCESSING_DELAY).await
}

pub async fn run_with(
    listener: TcpListener,
    items: Vec<Item>,
    processing_delay: Duration,
) -> Result<(), io::Error> {
    axum::serve(listener, app_with(items, processing_delay)).await
}

async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.db.read().await.clone())
}

async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let item = Item {
        id: Uuid::new_v4(),
        title: input.title,
        description: input.description,
        timestamp: Some(Utc::now()),
        status: ProcessingStatus::Pending,
        is_processing: false,
    };
    state.db.write().await.push(item.clone());
    tracing::debug!(id = %item.id, "created item");
    (StatusCode::CREATED, Json(item))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Item>, StatusCode> {
    let items = state.db.read().await;
    items
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn process_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Item>, StatusCode> {
    let mut items = state.db.write().await;
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    // already in flight or already done
    if matches!(
        item.status,
        ProcessingStatus::Processing | ProcessingStatus::Completed
    ) {
        return Err(StatusCode::BAD_REQUEST);
    }

    item.status = ProcessingStatus::Processing;
    item.is_processing = true;
    let snapshot = item.clone();
    drop(items);

    tracing::debug!(%id, "processing started");
    tokio::spawn(finish_processing(
        state.db.clone(),
        id,
        state.processing_delay,
    ));
    Ok(Json(snapshot))
}

/// Background half of the process endpoint: after the delay, mark the item
/// completed and stamp it. The item may have been deleted in the meantime.
async fn finish_processing(db: Db, id: Uuid, delay: Duration) {
    tokio::time::sleep(delay).await;
    let mut items = db.write().await;
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.status = ProcessingStatus::Completed;
        item.is_processing = false;
        item.timestamp = Some(Utc::now());
        tracing::debug!(%id, "processing completed");
    }
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut items = state.db.write().await;
    let before = items.len();
    items.retain(|item| item.id != id);
    if items.len() < before {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let items = state.db.read().await;
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "total_items": items.len(),
    }))
}
