//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache and data directories.

use std::path::PathBuf;

/// Get the platform-specific data directory for Athly
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/athly`
/// - Linux: `~/.local/share/athly` (or `$XDG_DATA_HOME/athly`)
/// - Windows: `%APPDATA%\athly`
/// - Fallback: `./athly_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "athly")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./athly_data"))
}

/// Get the platform-specific log directory for Athly
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/athly/logs`
/// - Linux: `~/.cache/athly/logs` (or `$XDG_CACHE_HOME/athly/logs`)
/// - Windows: `%LOCALAPPDATA%\athly\logs`
/// - Fallback: `./athly_data/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "athly")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./athly_data"));

    base_dir.join("logs")
}
