//! Health check handler

use axum::{Json, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use super::super::types::ApiResponse;

/// Health check response data
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    /// Crate version
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Health check endpoint
///
/// The order service is in-process, so a response at all means healthy.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check() -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let timestamp_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;

    (
        StatusCode::OK,
        Json(ApiResponse::new(
            "ok",
            HealthResponse {
                timestamp_ms,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        )),
    )
}
