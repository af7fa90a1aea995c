//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use resmap_domain::error::ResMapError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ResMapError`] to an HTTP response with appropriate status code.
pub struct ApiError(ResMapError);

impl From<ResMapError> for ApiError {
    fn from(err: ResMapError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ResMapError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            // The store's error text is relayed to the caller unmodified.
            ResMapError::Store(err) => {
                tracing::error!(error = %err, "store error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
