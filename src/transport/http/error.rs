//! The single place where handler failures are rendered to the wire.

use crate::storage::StoreError;
use crate::transport::http::types::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// A request failure carrying the HTTP status and the message sent to the client.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        tracing::error!(error = %err, source = ?source, "store failure");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::warn!(status = self.status.as_u16(), message = %self.message, "request failed");
        } else {
            tracing::debug!(status = self.status.as_u16(), message = %self.message, "request rejected");
        }
        let body = ErrorResponse {
            status: self.status.as_u16(),
            error_msg: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_status_and_message_envelope() {
        let response = ApiError::not_found("Could Not find Course with id: 42").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn store_errors_become_server_errors_with_fixed_message() {
        let err: ApiError = StoreError::Write {
            message: "Problem adding review",
            source: sqlx::Error::RowNotFound,
        }
        .into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Problem adding review");
    }

    #[test]
    fn envelope_uses_error_msg_key() {
        let body = ErrorResponse {
            status: 400,
            error_msg: "invalid id".to_string(),
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "status": 400, "errorMsg": "invalid id" })
        );
    }
}
