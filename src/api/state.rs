//! Application state for the Leave Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::leave::LeaveApplicationStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the loaded configuration and the leave application store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded leave configuration.
    config: Arc<ConfigLoader>,
    /// Submitted leave applications.
    store: Arc<RwLock<LeaveApplicationStore>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader and an empty store.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(LeaveApplicationStore::new())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared application store.
    pub fn store(&self) -> &RwLock<LeaveApplicationStore> {
        &self.store
    }
}
