//! Common test utilities.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Response;
use http_body_util::BodyExt;

use logkeep::server::{self, AppState};
use logkeep::store::file::FileLogStore;
use logkeep::store::{LogCollection, LogStore, MemoryLogStore, StorageError, StorageResult};

pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the app around an arbitrary store.
pub fn app_with_store(store: Arc<dyn LogStore>) -> Router {
    server::build_app(AppState::new(store, MAX_BODY_BYTES), 300)
}

/// Create a test app backed by an in-memory store.
///
/// Returns the store too so tests can inspect what was persisted.
pub fn memory_app() -> (Router, MemoryLogStore) {
    let store = MemoryLogStore::new();
    (app_with_store(Arc::new(store.clone())), store)
}

/// Create a test app backed by a log file in a fresh temp directory.
///
/// The file does not exist yet.
pub fn file_app() -> (Router, PathBuf) {
    use tempfile::TempDir;

    // Leak the TempDir so it doesn't get cleaned up during the test.
    let tmp = Box::leak(Box::new(TempDir::new().unwrap()));
    let path = tmp.path().join("logs.json");

    (app_with_store(Arc::new(FileLogStore::new(&path))), path)
}

/// Store whose writes always fail.
pub struct FailingLogStore;

#[async_trait]
impl LogStore for FailingLogStore {
    async fn load(&self) -> LogCollection {
        LogCollection::new()
    }

    async fn save(&self, _logs: &LogCollection) -> StorageResult<()> {
        Err(StorageError::unavailable("disk full"))
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
