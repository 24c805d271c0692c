// Application state module
// Shared, read-only state handed to every connection

use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;
use crate::directory::CityDirectory;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Café directory, immutable for the lifetime of the process
    pub directory: Arc<CityDirectory>,
    /// Fired once when the server should stop accepting connections
    pub shutdown_signal: Arc<Notify>,
}

impl AppState {
    pub fn new(config: Config, directory: CityDirectory) -> Self {
        Self {
            config,
            directory: Arc::new(directory),
            shutdown_signal: Arc::new(Notify::new()),
        }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
