//! Application state for the paystub engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::models::EmploymentConfiguration;

/// Shared application state.
///
/// Holds the stored employment configuration used by requests that do not
/// carry their own.
#[derive(Clone)]
pub struct AppState {
    configuration: Arc<RwLock<EmploymentConfiguration>>,
}

impl AppState {
    /// Creates a new application state around an initial configuration.
    pub fn new(configuration: EmploymentConfiguration) -> Self {
        Self {
            configuration: Arc::new(RwLock::new(configuration)),
        }
    }

    /// Creates a new application state from a loaded configuration file.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self::new(loader.into_configuration())
    }

    /// Returns a copy of the stored configuration.
    pub async fn configuration(&self) -> EmploymentConfiguration {
        self.configuration.read().await.clone()
    }

    /// Replaces the stored configuration.
    pub async fn replace_configuration(&self, configuration: EmploymentConfiguration) {
        *self.configuration.write().await = configuration;
    }
}
