use axum::{http::StatusCode, response::Response};

use super::{error_response, ErrorCode};

/// Router fallback: unknown paths get the JSON error envelope.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::NotFound,
        "The requested resource was not found".to_string(),
        None,
    )
}
