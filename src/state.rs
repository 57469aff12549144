use crate::config::ServerConfig;
use crate::store::FruitStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Fruit store (shared across requests)
    pub store: Arc<dyn FruitStore>,
}

impl AppState {
    /// Create new application state around an already-connected store.
    pub fn new(config: ServerConfig, store: Arc<dyn FruitStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
