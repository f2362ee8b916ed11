use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::core::error::CoreError;

/// Translates a `CoreError` propagated from a non-proxied orchestrator call
/// into an HTTP status and a small JSON body — the HTTP adapter's own
/// wire format, unrelated to the CAS-protocol bodies `ServiceAccessResponseFactory`
/// produces for proxied (relying-party-facing) calls.
#[derive(Debug, Clone)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl HttpError {
    pub fn from_core_error(error: CoreError) -> Self {
        let status = match &error {
            CoreError::UnauthorizedService(_) => StatusCode::FORBIDDEN,
            CoreError::NotFoundSession(_) => StatusCode::NOT_FOUND,
            CoreError::InvalidatedSession(_) => StatusCode::UNAUTHORIZED,
            CoreError::Authentication(_) | CoreError::Access(_) => StatusCode::UNAUTHORIZED,
            CoreError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CoreError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            message: error.to_string(),
        }
    }

}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
