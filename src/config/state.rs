// Application state module
// Immutable per-process state shared by all connections

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;
use crate::leave::LeaveProvider;

/// Application state
///
/// Nothing here is mutated by request handling; the leave provider is the
/// injection point for a real data source.
pub struct AppState {
    pub config: Config,
    pub provider: Arc<dyn LeaveProvider>,

    // Cached flag for lock-free access on the hot path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn LeaveProvider>) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);
        Self {
            config,
            provider,
            cached_access_log,
        }
    }
}
