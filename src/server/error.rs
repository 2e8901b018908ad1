use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers.
///
/// Every variant maps to one status code; bodies carry a single
/// `{"error": ...}` field. Internal failures are logged and masked.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid timestamp format, expected YYYY-MM-DD HH:MM")]
    InvalidTimestamp,
    #[error("rating must be within 0.0 and 5.0")]
    RatingOutOfRange,
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
    #[error("teacher not found")]
    TeacherNotFound,
    #[error("availability window not found")]
    AvailabilityNotFound,
    #[error("the requested slot is already taken")]
    SlotTaken,
    #[error("a teacher with this email already exists")]
    DuplicateEmail,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidTimestamp | ApiError::RatingOutOfRange | ApiError::UnknownSubject(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::TeacherNotFound | ApiError::AvailabilityNotFound => StatusCode::NOT_FOUND,
            ApiError::SlotTaken | ApiError::DuplicateEmail => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(e) = &self {
            tracing::error!("internal error: {:#}", e);
            return (status, Json(json!({ "error": "internal server error" }))).into_response();
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
