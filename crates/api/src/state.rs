use std::sync::Arc;

use autolot_store::VehicleStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Flat-file vehicle inventory.
    pub store: Arc<VehicleStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state from configuration, opening the inventory file it names.
    pub fn from_config(config: ServerConfig) -> Self {
        let store = VehicleStore::new(config.inventory_file.clone(), config.file_writes_enabled);
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
