//! Application state management

use std::sync::Arc;

use crate::{config::Config, store::UserStore};

/// Application state shared across handlers
///
/// Cloning is cheap: the configuration is reference counted and the store is
/// a shared handle.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<Config>,
    store: UserStore,
}

impl AppState {
    /// Create a new AppState around an existing store
    pub fn new(config: Config, store: UserStore) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// State for a freshly started service: the two sample users
    pub fn seeded(config: Config) -> Self {
        Self::new(config, UserStore::seeded())
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the user store
    pub fn store(&self) -> &UserStore {
        &self.store
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded(Config::default())
    }
}
