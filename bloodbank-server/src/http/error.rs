//! API error type with IntoResponse
//!
//! The one place errors become responses. Clients only ever see one of two
//! fixed bodies; store failures are logged here with their detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;
use crate::store::StoreError;

/// Body message for a 400
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Body message for a 500
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required field missing (400)
    Validation(ValidationError),

    /// Store unreachable, unconfigured or failing (500, logged)
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => {
                tracing::debug!(fields = ?e.fields(), "rejected request: {}", e);
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
            }
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = ?e, "Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::MissingFields {
            fields: vec!["name"],
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Missing required fields" })
        );
    }

    #[tokio::test]
    async fn store_error_is_opaque_500() {
        let err = ApiError::from(StoreError::InvalidDocument {
            collection: "requests",
            reason: "secret detail".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "Server error" }));
        assert!(!body.to_string().contains("secret"));
    }
}
