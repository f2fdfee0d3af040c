//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://www.baidu.com",
///   "expiration_in_minutes": 60
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortlink": "IFHZzaO" }
/// ```
///
/// Repeating the request for the same URL before it expires returns the
/// same short code.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 500 Internal Server Error if the backend is unavailable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let code = state
        .link_service
        .shorten(&payload.url, payload.expiration_in_minutes)
        .await?;

    info!(code = %code, ttl_minutes = payload.expiration_in_minutes, "Short link issued");

    Ok((StatusCode::CREATED, Json(ShortenResponse { shortlink: code })))
}
