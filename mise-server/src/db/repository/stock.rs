//! Stock Repository

use super::{RepoError, RepoResult, next_id};
use crate::db::JsonStore;
use shared::models::{Product, ProductCreate, ProductUpdate};

#[derive(Clone)]
pub struct StockRepository {
    store: JsonStore,
}

impl StockRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Full product sequence
    ///
    /// Never fails to the caller: storage errors are logged and an empty
    /// sequence returned.
    pub async fn list(&self) -> Vec<Product> {
        match self.store.load_products().await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(error = %e, "failed to read stock store");
                Vec::new()
            }
        }
    }

    /// Create a new product, assigning the next free id
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let mut products = self.store.load_products().await?;
        let id = next_id(products.iter().filter_map(|p| p.id));
        let product = Product {
            id: Some(id),
            name: data.name,
            cost: data.cost,
            vat_rate: data.vat_rate,
        };
        products.push(product.clone());
        self.store.save_products(&products).await?;
        Ok(product)
    }

    /// Merge the `Some` fields of `data` into the product with the given id
    pub async fn update(&self, id: i64, data: ProductUpdate) -> RepoResult<Product> {
        let mut products = self.store.load_products().await?;
        let Some(product) = products.iter_mut().find(|p| p.id == Some(id)) else {
            return Err(RepoError::NotFound(format!("product {}", id)));
        };

        if let Some(name) = data.name {
            product.name = name;
        }
        if let Some(cost) = data.cost {
            product.cost = cost;
        }
        if let Some(vat_rate) = data.vat_rate {
            product.vat_rate = vat_rate;
        }
        let updated = product.clone();

        self.store.save_products(&products).await?;
        Ok(updated)
    }

    /// Remove the product with the given id
    ///
    /// Returns whether a removal occurred.
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut products = self.store.load_products().await?;
        let before = products.len();
        products.retain(|p| p.id != Some(id));
        if products.len() == before {
            return Ok(false);
        }
        self.store.save_products(&products).await?;
        Ok(true)
    }
}
