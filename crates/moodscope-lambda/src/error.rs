use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use moodscope_instruments::error::{InstrumentError, ScoringError};

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => {
                tracing::debug!("rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<InstrumentError> for ApiError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::UnknownInstrument(_) => ApiError::NotFound(e.to_string()),
            InstrumentError::InvalidAnswers(_) => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
