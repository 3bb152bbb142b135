//! Application State
//!
//! Shared by the health handlers. The host keeps no other state: every other
//! request is answered straight from the bundle directory.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn dist_dir(&self) -> &Path {
        &self.config.dist_dir
    }

    /// Whether the fallback document is present on disk
    pub fn has_index(&self) -> bool {
        self.config.index_path().is_file()
    }
}
