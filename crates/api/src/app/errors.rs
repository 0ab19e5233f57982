use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use royalty_core::DomainError;

/// Map a domain error onto the wire contract.
///
/// `NotFound` always means "Author not found" here: authors are the only
/// addressable resource and validation errors carry their own message.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "Author not found"),
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::InvalidId(_) => json_error(StatusCode::BAD_REQUEST, "invalid author id"),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, msg)
        }
    }
}

/// Flat `{"error": message}` body, as every failure response renders.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}
