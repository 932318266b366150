//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};

// ============================================================================
// Logs
// ============================================================================

/// Response of `POST /api/logs`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplaceLogsResponse {
    pub message: String,
    pub total: usize,
}

/// Response of `DELETE /api/logs/all`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearLogsResponse {
    pub message: String,
}

// ============================================================================
// Health
// ============================================================================

/// Response of `GET /readyz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyzResponse {
    pub status: String,
    pub records: usize,
}
