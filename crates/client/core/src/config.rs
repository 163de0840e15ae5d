//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use client_kbo::KboConfig;

use crate::dirs;

/// Configuration required to bootstrap the document store and directory.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub kbo: KboConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ATHLY_DATA_DIR` - Directory holding the stored document (default: platform-specific)
    /// - `ATHLY_LOG_DIR` - Directory for log files (default: platform-specific)
    /// - `ATHLY_BACKEND_BASE` - Backend base URL (default: unset, demo mode)
    /// - `ATHLY_DEMO_SEARCH_DELAY_MS` - Demo search latency (default: 400)
    /// - `ATHLY_DEMO_SYNC_DELAY_MS` - Demo sync latency (default: 500)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_path("ATHLY_DATA_DIR"),
            log_dir: read_path("ATHLY_LOG_DIR"),
            kbo: KboConfig::from_env(),
        }
    }

    /// Data directory, falling back to the platform default.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(dirs::data_dir)
    }

    /// Log directory, falling back to the platform default.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(dirs::log_dir)
    }
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
