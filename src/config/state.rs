// Application state module
// Holds the frozen router and configuration shared by request tasks

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;
use crate::routing::Router;

/// Application state
///
/// Built once after startup initialization; read-only from then on.
pub struct AppState {
    pub config: Config,
    pub router: Arc<Router>,

    // Cached config values for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config, router: Router) -> Self {
        Self {
            config: config.clone(),
            router: Arc::new(router),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
