//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use rehnuma_domain::error::RehnumaError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Errors surfaced by the API, each mapped to a status code.
#[derive(Debug)]
pub enum ApiError {
    /// A path identifier that is not a number.
    InvalidId,
    /// A request body that is not the expected JSON.
    InvalidBody(JsonRejection),
    /// Any error raised by the application layer.
    Domain(RehnumaError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl From<RehnumaError> for ApiError {
    fn from(err: RehnumaError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidId => (StatusCode::NOT_FOUND, "Invalid ID".to_string()),
            Self::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            Self::Domain(RehnumaError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(RehnumaError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(err @ (RehnumaError::Storage(_) | RehnumaError::Seed(_))) => {
                tracing::error!(
                    error = %err,
                    source = ?std::error::Error::source(err),
                    "request failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
