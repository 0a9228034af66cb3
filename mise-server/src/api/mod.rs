//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness endpoint
//! - [`products`] - stock product endpoints
//! - [`menus`] - menu endpoints

pub mod health;
pub mod menus;
pub mod products;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the axum router (without middleware or state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(products::router())
        .merge(menus::router())
}

/// Build the full application: routes, state, CORS and request tracing
///
/// CORS is permissive: the UI is served from another origin.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
