use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Wire shape for every failed request: `{"success": false, "error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

/// Analysis itself is infallible (failed fetches degrade to empty parts),
/// so the only failure surfaced to callers is a rejected request body.
#[derive(Debug)]
pub(crate) enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(ErrorResponse { success: false, error })).into_response()
    }
}
