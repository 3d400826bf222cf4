pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
};

use crate::analysis::handlers;
use crate::errors::panic_response;
use crate::state::AppState;

/// CORS applies to `/api/*` only, restricted to the configured origins.
/// Panics under `/api` render as the 500 error envelope.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(&state.config.cors_allowed_origins));

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api", api)
        .with_state(state)
}

// Origins are validated when the config loads.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
