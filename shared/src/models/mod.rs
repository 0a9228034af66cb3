//! Data models
//!
//! Shared between the server and API consumers. All ids are `i64`,
//! assigned by the repositories at creation time.

pub mod menu;
pub mod product;

// Re-exports
pub use menu::*;
pub use product::*;
