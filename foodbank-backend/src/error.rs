use axum::extract::rejection::BytesRejection;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;

/// Message returned to callers for every processing failure.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Error raised while handling a request.
///
/// Variants exist so the server log records the cause. Callers always see the
/// same generic 500 body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),
    #[error("request body is not valid JSON: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("request body is JSON null")]
    NullBody,
}

/// JSON body of a failed response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!(error = %self, "request processing failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: INTERNAL_SERVER_ERROR,
            }),
        )
            .into_response()
    }
}
