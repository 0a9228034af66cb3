//! Product API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::StockRepository;
use crate::pricing::CostPropagator;
use crate::utils::{AppError, AppResult};
use shared::models::{Product, ProductCreate, ProductUpdate};

/// PUT /products payload: id plus the fields to merge
#[derive(Debug, Deserialize)]
pub struct ProductUpdateRequest {
    pub id: i64,
    pub updates: ProductUpdate,
}

/// DELETE /products query string
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<i64>,
}

/// DELETE /products response body
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// GET /products - full stock list
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Product>> {
    let repo = StockRepository::new(state.store.clone());
    Json(repo.list().await)
}

/// POST /products - create a stock product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    let repo = StockRepository::new(state.store.clone());
    let product = repo.create(payload).await?;

    tracing::info!(id = ?product.id, name = %product.name, "product created");
    Ok(Json(product))
}

/// PUT /products - merge fields into a product and push the change into
/// every menu that embeds it
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<ProductUpdateRequest>,
) -> AppResult<Json<Product>> {
    let repo = StockRepository::new(state.store.clone());
    let product = repo.update(payload.id, payload.updates).await?;

    // Second, independent write: the stock file and the menu file share no
    // transaction.
    let propagator = CostPropagator::new(state.store.clone());
    propagator.propagate_update(&product).await?;

    Ok(Json(product))
}

/// DELETE /products?id=N - remove a product and cascade into menus
pub async fn delete(
    State(state): State<ServerState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<Json<DeleteResponse>> {
    let id = match params.id {
        Some(id) if id > 0 => id,
        _ => return Err(AppError::validation("product id is required")),
    };

    let repo = StockRepository::new(state.store.clone());
    if !repo.delete(id).await? {
        return Err(AppError::not_found(format!("product {}", id)));
    }

    let propagator = CostPropagator::new(state.store.clone());
    propagator.propagate_removal(id).await?;

    tracing::info!(id, "product deleted");
    Ok(Json(DeleteResponse { success: true }))
}
