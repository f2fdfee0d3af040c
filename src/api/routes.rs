//! API route configuration.

use crate::api::handlers::{info_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`              - Allocate (or reuse) a short code for a URL
/// - `GET  /info?shortlink={code}` - Detail record of a short code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/info", get(info_handler))
}
