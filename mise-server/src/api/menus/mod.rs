//! Menu API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/menus",
        get(handler::list).post(handler::create).put(handler::update),
    )
}
