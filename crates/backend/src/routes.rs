use axum::{routing::get, Router};

use crate::handlers;

/// Route table for the proxy server.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/barangs", get(handlers::barangs::list))
}
