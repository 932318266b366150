//! File-based log collection storage.
//!
//! The whole collection lives in one JSON array document (by default
//! `logs.json`), written with 2-space indentation and non-ASCII characters
//! kept as-is.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;

use crate::store::error::{StorageError, StorageResult};
use crate::store::logs::{LogCollection, LogStore};

/// File-based implementation of `LogStore`.
///
/// Saves within one process are serialized so they never share a temp file.
/// The last save to finish determines the stored collection.
#[derive(Debug, Clone)]
pub struct FileLogStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileLogStore {
    /// Create a new file log store.
    ///
    /// The file is created on the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling temp file used for atomic replacement.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("logs.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn write(&self, logs: &LogCollection) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write_locked(logs).await
    }

    /// Caller must hold `write_lock`.
    async fn write_locked(&self, logs: &LogCollection) -> StorageResult<()> {
        let content = serde_json::to_vec_pretty(logs)
            .map_err(|e| StorageError::serialization(e.to_string()))?;
        super::atomic_write_file(&self.tmp_path(), &self.path, &content).await
    }

    /// Create the file as `[]` unless a save got there first.
    async fn create_if_missing(&self) -> LogCollection {
        let _guard = self.write_lock.lock().await;

        // Re-read under the lock: a save may have landed since the first read.
        match fs::read(&self.path).await {
            Ok(content) => return self.parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read log file, starting with empty collection"
                );
                return LogCollection::new();
            }
        }

        let empty = LogCollection::new();
        match self.write_locked(&empty).await {
            Ok(()) => tracing::info!(path = %self.path.display(), "Created empty log file"),
            Err(e) => tracing::error!(error = %e, "Failed to create log file"),
        }
        empty
    }

    fn parse(&self, content: &[u8]) -> LogCollection {
        // Corrupt documents are reported, not repaired; the next save overwrites them.
        match serde_json::from_slice::<Value>(content) {
            Ok(value) => LogCollection::from_value(value).unwrap_or_else(|other| {
                tracing::warn!(
                    path = %self.path.display(),
                    found = json_kind(&other),
                    "Log file does not contain a JSON array, starting with empty collection"
                );
                LogCollection::new()
            }),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to parse log file, starting with empty collection"
                );
                LogCollection::new()
            }
        }
    }
}

/// Short name of a JSON value's type, for diagnostics.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl LogStore for FileLogStore {
    async fn load(&self) -> LogCollection {
        match fs::read(&self.path).await {
            Ok(content) => self.parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => self.create_if_missing().await,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read log file, starting with empty collection"
                );
                LogCollection::new()
            }
        }
    }

    async fn save(&self, logs: &LogCollection) -> StorageResult<()> {
        if let Err(e) = self.write(logs).await {
            tracing::error!(error = %e, "Failed to save logs");
            return Err(e);
        }

        tracing::debug!(path = %self.path.display(), total = logs.len(), "saved logs");
        Ok(())
    }
}
