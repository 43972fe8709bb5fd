//! Health check endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/api/healthcheck` - Always `true`; does not touch the store

use axum::{http::StatusCode, Json};

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /api/healthcheck
#[axum::debug_handler]
pub async fn healthcheck() -> Json<bool> {
    Json(true)
}
