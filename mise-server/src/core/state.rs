use crate::core::Config;
use crate::db::JsonStore;

/// Shared application state handed to every handler
///
/// Cheap to clone: the store only carries the data directory path. Every
/// request re-reads the files, so there is no in-memory cache to share.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// JSON-file store for stock and menus
    pub store: JsonStore,
}

impl ServerState {
    /// Build the state for a given configuration
    pub fn initialize(config: &Config) -> Self {
        let store = JsonStore::new(config.data_path());
        Self {
            config: config.clone(),
            store,
        }
    }
}
