use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::ReadyzResponse;
use crate::server::AppState;

pub async fn livez() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Ready once the store answers a load.
pub async fn readyz(State(state): State<AppState>) -> Json<ReadyzResponse> {
    let records = state.logs.load().await.len();
    Json(ReadyzResponse {
        status: "ok".to_string(),
        records,
    })
}
