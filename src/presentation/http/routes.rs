//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Health check endpoint
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// Cliente API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clientes",
            get(handlers::customer::index).post(handlers::customer::create),
        )
        .route("/clientes/page/{page}", get(handlers::customer::page))
        .route("/clientes/upload", post(handlers::customer::upload))
        .route(
            "/clientes/{id}",
            get(handlers::customer::show)
                .put(handlers::customer::update)
                .delete(handlers::customer::delete),
        )
}
