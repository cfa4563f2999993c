// File: src/response.rs
// Purpose: JSON error responses for the API routes

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use plz_forms::ValidationFailure;
use restaurant_store::LookupError;
use serde::Serialize;

#[derive(Debug)]
pub struct ErrorResponse {
    status: StatusCode,
    message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });

        (self.status, body).into_response()
    }
}

impl From<ValidationFailure> for ErrorResponse {
    fn from(failure: ValidationFailure) -> Self {
        ErrorResponse::bad_request(failure.message())
    }
}

impl From<LookupError> for ErrorResponse {
    fn from(err: LookupError) -> Self {
        match &err {
            LookupError::InvalidPlz(failure) => (*failure).into(),
            LookupError::Unavailable(_) => {
                tracing::warn!(error = %err, "restaurant lookup unavailable");
                ErrorResponse::unavailable(err.to_string())
            }
        }
    }
}
