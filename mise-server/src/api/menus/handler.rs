//! Menu API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::MenuRepository;
use crate::pricing::calculator;
use crate::utils::{AppError, AppResult};
use shared::models::{Menu, MenuCreate};

/// GET /menus - full menu list
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Menu>> {
    let repo = MenuRepository::new(state.store.clone());
    Json(repo.list().await)
}

/// POST /menus - create a menu
///
/// Unit costs and aggregates are derived server-side from the embedded
/// snapshots, whatever the client sent.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCreate>,
) -> AppResult<Json<Menu>> {
    let mut menu = Menu {
        id: None,
        menu_name: payload.menu_name,
        ingredients: payload.ingredients,
        base_cost: 0.0,
        vat_amount: 0.0,
        total_cost: 0.0,
    };
    calculator::normalize_menu(&mut menu);

    let repo = MenuRepository::new(state.store.clone());
    let menu = repo.create(menu).await?;

    tracing::info!(id = ?menu.id, name = %menu.menu_name, "menu created");
    Ok(Json(menu))
}

/// PUT /menus - full replace of an existing menu, re-deriving costs
pub async fn update(
    State(state): State<ServerState>,
    Json(mut payload): Json<Menu>,
) -> AppResult<Json<Menu>> {
    if payload.id.is_none() {
        return Err(AppError::validation("menu id is required"));
    }
    calculator::normalize_menu(&mut payload);

    let repo = MenuRepository::new(state.store.clone());
    let menu = repo.update(payload).await?;
    Ok(Json(menu))
}
