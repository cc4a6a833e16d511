//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hearth_domain::error::HearthError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HearthError`] to an HTTP response with appropriate status code.
pub struct ApiError(HearthError);

impl From<HearthError> for ApiError {
    fn from(err: HearthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HearthError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HearthError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HearthError::Auth(err) => (StatusCode::UNAUTHORIZED, err.to_string()),
            HearthError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
