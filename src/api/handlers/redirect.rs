//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base62::is_valid_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed, was never issued, or has
/// expired. Malformed codes never reach the backend.
/// Returns 500 Internal Server Error if the backend is unavailable or the
/// stored URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::not_found(
            "Unknown short URL",
            json!({ "code": code }),
        ));
    }

    let long_url = state.link_service.unshorten(&code).await?;
    let location = HeaderValue::from_str(&long_url).map_err(|e| {
        error!(code = %code, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Stored URL cannot be redirected to", json!({ "code": code }))
    })?;
    debug!(code = %code, "Redirecting");

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
