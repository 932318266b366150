//! Log collection storage trait.
//!
//! Defines the interface for persisting the whole log collection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::StorageResult;

// ============================================================================
// LogCollection
// ============================================================================

/// The full ordered set of log records.
///
/// Records are opaque JSON values; nothing about their shape is checked.
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogCollection(Vec<Value>);

impl LogCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[Value] {
        &self.0
    }

    pub fn into_records(self) -> Vec<Value> {
        self.0
    }

    /// Build a collection from an arbitrary JSON value.
    ///
    /// Returns the value back if it is not an array.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Array(records) => Ok(Self(records)),
            other => Err(other),
        }
    }
}

impl From<Vec<Value>> for LogCollection {
    fn from(records: Vec<Value>) -> Self {
        Self(records)
    }
}

// ============================================================================
// LogStore
// ============================================================================

/// Storage interface for the log collection.
///
/// Every write replaces the collection wholesale; there are no partial
/// updates. Concurrent saves resolve as last-writer-wins.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Load the whole collection.
    ///
    /// Never fails: a missing, unreadable or corrupt backing document is
    /// reported through a diagnostic and yields an empty collection.
    async fn load(&self) -> LogCollection;

    /// Replace the whole collection.
    ///
    /// Must be atomic - either fully succeeds or has no effect.
    async fn save(&self, logs: &LogCollection) -> StorageResult<()>;
}
