//! HTTP API server

use axum::{
    routing::{get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route(
            "/items/",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/:id",
            put(handlers::update_item).delete(handlers::delete_item),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // the browser frontend is served from another origin
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
