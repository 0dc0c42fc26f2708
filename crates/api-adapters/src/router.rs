//! Route table and middleware for the Fishlog API.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ai/detect", post(handlers::detect))
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/logbook/add", post(handlers::add_capture))
        .route("/logbook/list", get(handlers::list_captures))
        .layer(cors_policy())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wide-open CORS: the Expo client runs from arbitrary dev origins.
///
/// Unsuitable for any deployment handling real credentials.
pub fn cors_policy() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
