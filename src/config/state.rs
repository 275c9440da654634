// Application state module
// Holds the loaded configuration and per-process services

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;
use crate::page::PageResolver;

/// Application state shared across all connections
pub struct AppState {
    pub config: Config,
    pub resolver: PageResolver,

    // Cached config values for fast access without locks
    pub cached_access_log: Arc<AtomicBool>,
}

impl AppState {
    /// Create `AppState` from a loaded configuration
    ///
    /// Fails when the site's default page is missing; the server refuses
    /// to start without a fallback target.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let resolver = PageResolver::new(&config.site)?;
        let cached_access_log = Arc::new(AtomicBool::new(config.logging.access_log));

        Ok(Self {
            config,
            resolver,
            cached_access_log,
        })
    }
}
