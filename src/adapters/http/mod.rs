//! HTTP adapters - REST API implementations.
//!
//! The chatbot adapter exposes the conversation engine; [`app_router`]
//! wraps it with the tracing and CORS layers every deployment uses.

pub mod chatbot;

use std::time::Duration;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-export key types for convenience
pub use chatbot::chat_router;
pub use chatbot::ChatAppState;

/// Builds the complete application router.
///
/// An empty `cors_origins` list allows any origin. `request_timeout` applies
/// to the storage routes; turns are bounded by the engine's generation timeout.
pub fn app_router(state: ChatAppState, request_timeout: Duration, cors_origins: &[String]) -> Router {
    chat_router(request_timeout)
        .with_state(state)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
