use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::response::Json;
use serde_json::Value;

use super::dto::{LoginRequest, LoginResponse};
use crate::error::ApiError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// POST /auth
/// Accepts any JSON body except `null` and answers with a fixed success message.
///
/// The body is read as raw bytes so the `Content-Type` header plays no part.
/// A leading UTF-8 byte order mark is ignored. Read and parse failures surface
/// as [`ApiError`], which renders a generic 500.
pub async fn login(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let bytes = body?;
    let raw = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
    let payload: Value = serde_json::from_slice(raw)?;
    // Fields cannot be read off `null`.
    if payload.is_null() {
        return Err(ApiError::NullBody);
    }
    let request = LoginRequest::from_value(&payload);

    tracing::info!(
        ?request,
        password_supplied = request.password.is_some(),
        "received login request"
    );

    Ok(Json(LoginResponse::success()))
}
