//! HTTP API route definitions and middleware layering.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{middleware, routing::get, Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use super::handlers::{health, not_found, security_headers, status, welcome, AppState, ErrorBody};
use crate::error::fault_message;

/// Create the API router.
///
/// Layer order, outermost first: request tracing, CORS, security headers,
/// panic guard. The guard sits closest to the handlers so 500 responses
/// still pass through the header-injecting layers.
pub fn create_router(state: AppState) -> Router {
    let is_development = state.config.is_development();

    // Method fallbacks keep unmatched methods on known paths at 404,
    // matching the unmatched-path behavior.
    Router::new()
        .route("/", get(welcome).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .route("/api/status", get(status).fallback(not_found))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_responder(is_development)))
        .layer(middleware::from_fn(security_headers))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the panic-to-response converter for the catch-panic layer.
///
/// Logs the fault detail server-side and discloses it to the client only
/// in development.
fn panic_responder(
    is_development: bool,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + 'static {
    move |err| {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            (*s).to_string()
        } else {
            "unhandled fault".to_string()
        };

        error!("handler fault: {detail}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::fault(fault_message(&detail, is_development))),
        )
            .into_response()
    }
}
