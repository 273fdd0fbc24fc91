use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Wire shape for every error response: `{ "error": ..., "message": ... }`.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: ErrorMessage,
}

/// Validation failures report one complaint per field; everything else
/// carries a single string.
#[derive(Serialize)]
#[serde(untagged)]
enum ErrorMessage {
    Single(String),
    Fields(Vec<String>),
}

/// Domain-visible error taxonomy, mapped onto HTTP statuses by
/// [`IntoResponse`].
///
/// Store-level failures are translated into these variants exactly once,
/// at the service boundary. `Internal` deliberately carries no detail:
/// the cause is logged, never exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Validation(Vec<String>),
    NotFound(String),
    Conflict(String),
    Internal,
}

impl AppError {
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation(messages)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::Validation(messages) => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                ErrorMessage::Fields(messages),
            ),
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                ErrorMessage::Single(message),
            ),
            AppError::Conflict(message) => (
                StatusCode::CONFLICT,
                "Conflict",
                ErrorMessage::Single(message),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                ErrorMessage::Single("Internal Server Error".to_string()),
            ),
        };

        (status, Json(ErrorBody { error, message })).into_response()
    }
}
