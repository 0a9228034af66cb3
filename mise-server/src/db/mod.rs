//! JSON file storage layer
//!
//! # Files
//!
//! | File | Contents |
//! |------|----------|
//! | `stock.json` | product sequence |
//! | `menu.json` | menu sequence |
//!
//! Both live under the configured data directory and are created as empty
//! arrays on first access. Every save rewrites the whole file,
//! pretty-printed. There is no locking and no cross-file transaction:
//! concurrent read-modify-write cycles race and the last writer wins.

pub mod repository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{Menu, Product};
use std::path::{Path, PathBuf};
use thiserror::Error;

const STOCK_FILE: &str = "stock.json";
const MENU_FILE: &str = "menu.json";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// JSON-file store with an injected data directory
#[derive(Clone, Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the data directory and both stores if absent
    pub async fn ensure_ready(&self) -> StoreResult<()> {
        self.load_products().await?;
        self.load_menus().await?;
        Ok(())
    }

    /// Load the product sequence, creating an empty store on first access
    pub async fn load_products(&self) -> StoreResult<Vec<Product>> {
        self.load_seq(STOCK_FILE).await
    }

    /// Rewrite the product sequence wholesale
    pub async fn save_products(&self, products: &[Product]) -> StoreResult<()> {
        self.save_seq(STOCK_FILE, products).await
    }

    /// Load the menu sequence, creating an empty store on first access
    pub async fn load_menus(&self) -> StoreResult<Vec<Menu>> {
        self.load_seq(MENU_FILE).await
    }

    /// Rewrite the menu sequence wholesale
    pub async fn save_menus(&self, menus: &[Menu]) -> StoreResult<()> {
        self.save_seq(MENU_FILE, menus).await
    }

    async fn load_seq<T: DeserializeOwned>(&self, file: &str) -> StoreResult<Vec<T>> {
        let path = self.data_dir.join(file);
        if !tokio::fs::try_exists(&path).await? {
            tokio::fs::create_dir_all(&self.data_dir).await?;
            tokio::fs::write(&path, "[]").await?;
            return Ok(Vec::new());
        }
        let data = tokio::fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&data)?)
    }

    async fn save_seq<T: Serialize>(&self, file: &str, items: &[T]) -> StoreResult<()> {
        let path = self.data_dir.join(file);
        let data = serde_json::to_string_pretty(items)?;
        tokio::fs::write(&path, data).await?;
        Ok(())
    }
}
