use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a proxy handler can surface on its own. Upstream HTTP statuses
/// are relayed as-is and never pass through here; only transport failures
/// (connect, DNS, body read) do, and those carry no status to relay.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (StatusCode::BAD_GATEWAY, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
