//! Log collection HTTP handlers.
//!
//! Every write replaces the whole collection. Records are stored exactly as
//! received; only the top-level "is it an array" check is applied.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::{error, info};

use crate::api::{ClearLogsResponse, ReplaceLogsResponse};
use crate::handlers::problem_details;
use crate::server::AppState;
use crate::store::LogCollection;

/// GET /api/logs
pub async fn list_logs(State(state): State<AppState>) -> Json<LogCollection> {
    Json(state.logs.load().await)
}

/// POST /api/logs
pub async fn replace_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !is_json_content_type(&headers) {
        return problem_details::bad_request("Content-Type must be application/json")
            .into_response();
    }

    let value: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            return problem_details::bad_request(format!("request body is not valid JSON: {e}"))
                .into_response();
        }
    };

    let Ok(logs) = LogCollection::from_value(value) else {
        return problem_details::bad_request("request body must be a JSON array of logs")
            .into_response();
    };

    if let Err(e) = state.logs.save(&logs).await {
        error!(error = %e, "failed to save logs");
        return problem_details::internal_error("failed to save logs").into_response();
    }

    info!(total = logs.len(), "Logs replaced");
    let response = ReplaceLogsResponse {
        message: "Logs saved.".to_string(),
        total: logs.len(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// DELETE /api/logs/all
pub async fn clear_logs(State(state): State<AppState>) -> Response {
    if let Err(e) = state.logs.save(&LogCollection::new()).await {
        error!(error = %e, "failed to clear logs");
        return problem_details::internal_error("failed to clear logs").into_response();
    }

    info!("All logs cleared");
    let response = ClearLogsResponse {
        message: "All logs cleared.".to_string(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// True for `application/json` and `application/*+json`, ignoring parameters.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.split_once('/') {
        Some(("application", "json")) => true,
        Some(("application", subtype)) => subtype.ends_with("+json"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn accepts_json_content_types() {
        assert!(is_json_content_type(&headers("application/json")));
        assert!(is_json_content_type(&headers("application/json; charset=utf-8")));
        assert!(is_json_content_type(&headers("Application/JSON")));
        assert!(is_json_content_type(&headers("application/vnd.logs+json")));
    }

    #[test]
    fn rejects_other_content_types() {
        assert!(!is_json_content_type(&HeaderMap::new()));
        assert!(!is_json_content_type(&headers("text/plain")));
        assert!(!is_json_content_type(&headers("text/json")));
        assert!(!is_json_content_type(&headers("application/x-www-form-urlencoded")));
        assert!(!is_json_content_type(&headers("application/jsonp")));
    }
}
