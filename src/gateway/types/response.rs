//! API response envelope and error mapping
//!
//! - `ApiResponse<T>`: Unified `{message, data}` envelope
//! - `ApiError`: Failure carried out of a handler, rendered as the same envelope
//! - `messages`: Fixed envelope messages

use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::gateway::services::OrderError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses, success or failure, follow this structure:
/// - message: short human-readable outcome
/// - data: payload on success, failure description on error, or null
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response message
    #[schema(example = "Order fetched successfully!")]
    pub message: String,
    /// Response data (always present, `null` when empty)
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Handler result: envelope on success, [`ApiError`] on failure
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 OK with the given message and payload
pub fn ok<T>(message: &str, data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::new(message, data))))
}

// ============================================================================
// Messages
// ============================================================================

/// Fixed envelope messages
pub mod messages {
    pub const ORDER_CREATED: &str = "Order created successfully!";
    pub const ORDER_FETCHED: &str = "Order fetched successfully!";

    /// Classified client-side failures (not found, rejected request)
    pub const OOPS: &str = "Oops!";
    /// Unclassified failures
    pub const ERROR_OCCURRED: &str = "Error Occurred";
}

// ============================================================================
// ApiError
// ============================================================================

/// Error returned by handlers
///
/// Rendered as `ApiResponse<String>` where `data` carries the failure
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: &'static str, detail: impl Into<String>) -> Self {
        Self {
            status,
            message,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, messages::OOPS, detail)
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages::OOPS, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::ERROR_OCCURRED,
            detail,
        )
    }

    /// Wrap into `Err` for early returns
    pub fn into_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let detail = err.to_string();
        match err {
            OrderError::NotFound(_) => Self::not_found(detail),
            OrderError::InvalidRequest(_) => Self::bad_request(detail),
            OrderError::Internal(_) => Self::internal(detail),
        }
    }
}

/// Malformed path segment (e.g. non-numeric or negative id)
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

/// Missing or malformed query parameter
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::new(self.message, self.detail);
        (self.status, Json(body)).into_response()
    }
}
