//! Handler for short link details.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::info::InfoQuery;
use crate::domain::entities::LinkDetail;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the detail record of a short code.
///
/// # Endpoint
///
/// `GET /api/info?shortlink={code}`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://www.baidu.com",
///   "created_at": "2019-12-12T12:12:12Z",
///   "expiration_in_minutes": 60
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `shortlink` is malformed.
/// Returns 404 Not Found if no detail record exists for the code.
/// Returns 500 Internal Server Error if the backend is unavailable.
pub async fn info_handler(
    State(state): State<AppState>,
    Query(query): Query<InfoQuery>,
) -> Result<Json<LinkDetail>, AppError> {
    query.validate()?;

    let detail = state.link_service.shortlink_info(&query.shortlink).await?;

    Ok(Json(detail))
}
