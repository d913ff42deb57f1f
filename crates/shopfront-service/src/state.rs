//! Application state.

use std::time::Instant;

use shopfront_store::{Catalog, MemoryStore, StoreError};

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Query operations over the immutable store.
    pub catalog: Catalog<MemoryStore>,

    /// Service configuration.
    pub config: ServiceConfig,

    /// When the service started, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Create application state around an already built store.
    #[must_use]
    pub fn new(store: MemoryStore, config: ServiceConfig) -> Self {
        Self {
            catalog: Catalog::new(store),
            config,
            started_at: Instant::now(),
        }
    }

    /// Build the store described by `config` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured seed file cannot be loaded.
    pub fn from_config(config: ServiceConfig) -> Result<Self, StoreError> {
        let store = match config.seed_path.as_deref() {
            Some(path) => MemoryStore::open(path)?,
            None => {
                tracing::info!("No seed file configured - using built-in catalog");
                MemoryStore::seeded()
            }
        };
        Ok(Self::new(store, config))
    }

    /// Seconds since the state was created.
    #[must_use]
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
