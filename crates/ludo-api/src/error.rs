//! API error types and HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use ludo_core::Error as CoreError;

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Standard JSON error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    /// Human-readable message (safe for clients).
    pub detail: String,
}

/// HTTP API error.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// Returns an error response for invalid input.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    /// Returns an error response for missing resources.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    /// Returns an internal error response.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the human-readable detail message.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, detail = %self.detail, "Request failed");
        }
        (self.status, Json(ApiErrorBody { detail: self.detail })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidInput(message) => Self::bad_request(message),
            CoreError::ResourceNotFound { resource_type, .. } => {
                Self::not_found(format!("{resource_type} not found"))
            }
            CoreError::Storage { message, .. }
            | CoreError::Serialization { message }
            | CoreError::Internal { message } => Self::internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let error = ApiError::from(CoreError::InvalidInput("nope".to_string()));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.detail(), "nope");
    }

    #[test]
    fn resource_not_found_maps_to_404_with_short_detail() {
        let error = ApiError::from(CoreError::resource_not_found("Component", "01ABC"));
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.detail(), "Component not found");
    }

    #[test]
    fn storage_maps_to_internal() {
        let error = ApiError::from(CoreError::storage("down"));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn body_uses_detail_field() {
        let body = serde_json::to_value(ApiErrorBody {
            detail: "Step not found".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"detail": "Step not found"}));
    }
}
