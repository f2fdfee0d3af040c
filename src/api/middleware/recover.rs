//! Panic recovery middleware.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Converts a panicking handler into a `500` JSON error response.
///
/// The panic message is logged but never sent to the client.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "Handler panicked");

    AppError::internal("Internal server error", json!({})).into_response()
}
