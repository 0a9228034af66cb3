//! Repository Module
//!
//! CRUD over the JSON stores. Read paths backing GET endpoints mask
//! storage failures (logged, empty sequence returned); mutation paths
//! propagate them.

pub mod menu;
pub mod stock;

// Re-exports
pub use menu::MenuRepository;
pub use stock::StockRepository;

use crate::db::StoreError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for RepoError {
    fn from(err: StoreError) -> Self {
        RepoError::Storage(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Next free id: one past the highest in use, starting at 1
pub(crate) fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}
