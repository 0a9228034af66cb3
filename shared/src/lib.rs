//! Shared types for the Mise cost server
//!
//! Data models exchanged between the HTTP API and its consumers, persisted
//! verbatim in the JSON stores. Wire format is camelCase to stay compatible
//! with the stored files.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
