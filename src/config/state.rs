// Application state module
// Holds the loaded configuration shared by every connection

use std::sync::atomic::AtomicUsize;

use super::types::Config;

/// Application state
///
/// Nothing here is touched by the request handlers except read-only config.
/// The connection counter belongs to the accept loop.
pub struct AppState {
    pub config: Config,
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            active_connections: AtomicUsize::new(0),
        }
    }
}
