//! Mise Cost Server - restaurant cost management service
//!
//! Tracks raw-ingredient stock prices (with VAT rates) and composes them
//! into menu items with derived cost aggregates. State lives in two flat
//! JSON files; menus embed frozen snapshots of the products they were built
//! from, and a propagation pass keeps those snapshots and the derived costs
//! consistent whenever stock changes.
//!
//! # Module structure
//!
//! ```text
//! mise-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # JSON store and repositories
//! ├── pricing/       # cost calculator and propagation engine
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::JsonStore;
pub use crate::pricing::CostPropagator;
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging. Called once at startup.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    __  ____
   /  |/  (_)_______
  / /|_/ / / ___/ _ \
 / /  / / (__  )  __/
/_/  /_/_/____/\___/
    "#
    );
}
