use crate::{
    handlers, // Import handlers module
    AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Creates the Axum router and associates routes with handlers.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/shorts", get(handlers::list_shorts).post(handlers::create_short))
        .route("/shorts/{id}", get(handlers::get_short))
        .route("/shorts/{id}/like", post(handlers::toggle_like))
        .route("/shorts/{id}/comments", post(handlers::add_comment))
        .route("/shorts/{id}/share", post(handlers::share_short))
        // Middleware Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state) // Pass the application state
}
