//! Maps `dms_core::AppError` onto the HTTP status codes in §6/§7 of the
//! spec. The core never depends on axum; this is the one place that
//! translates its error taxonomy into a wire response.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dms_core::AppError;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        HttpError(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Precondition(_) => (StatusCode::CONFLICT, "PRECONDITION"),
            AppError::Capacity(_) => (StatusCode::PAYLOAD_TOO_LARGE, "CAPACITY"),
            AppError::ServiceUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "NAS_UNAVAILABLE"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        };

        if matches!(status, StatusCode::INTERNAL_SERVER_ERROR) {
            log::error!("internal error: {}", self.0);
        }

        let body = Json(ErrorBody {
            error: code.to_string(),
            message: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
