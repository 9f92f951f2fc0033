use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::LlmClientError;
use crate::application::services::{QueryServiceError, TranscriptionServiceError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error returned by every handler, rendered as `{error, message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, message: Option<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: error.into(),
                message,
                details: None,
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(StatusCode::BAD_REQUEST, message.clone(), Some(message))
    }

    pub fn internal(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error,
            Some(message.into()),
        )
    }

    /// Maps a pipeline error; `failure` names the flow in the `error` field.
    pub fn from_transcription(err: TranscriptionServiceError, failure: &str) -> Self {
        match err {
            TranscriptionServiceError::Validation(message) => Self::bad_request(message),
            TranscriptionServiceError::Timeout(_) => {
                Self::new(StatusCode::GATEWAY_TIMEOUT, failure, Some(err.to_string()))
            }
            TranscriptionServiceError::Cancelled => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                failure,
                Some(err.to_string()),
            ),
            other => Self::internal(failure, other.to_string()),
        }
    }
}

impl From<QueryServiceError> for ApiError {
    fn from(err: QueryServiceError) -> Self {
        match err {
            QueryServiceError::Validation(message) => Self::bad_request(message),
            QueryServiceError::Llm(LlmClientError::UpstreamStatus { status, body }) => Self {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                body: ErrorResponse {
                    error: "Failed to get response from AI".to_string(),
                    message: None,
                    details: Some(body),
                },
            },
            other => Self::internal("Internal server error", other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
