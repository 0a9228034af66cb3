//! Health check route
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Liveness and store readability |
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "products": 12,
//!   "menus": 3
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | degraded)
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    /// Number of stored products, when the stock file is readable
    #[serde(skip_serializing_if = "Option::is_none")]
    products: Option<usize>,
    /// Number of stored menus, when the menu file is readable
    #[serde(skip_serializing_if = "Option::is_none")]
    menus: Option<usize>,
}

// Server start time (lazily initialized on first check)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let products = state.store.load_products().await.ok().map(|p| p.len());
    let menus = state.store.load_menus().await.ok().map(|m| m.len());
    let status = if products.is_some() && menus.is_some() {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime_seconds(),
        products,
        menus,
    })
}
