//! Player directory capability: name search and remote sync.
//!
//! [`PlayerDirectory`] is implemented twice:
//! - [`HttpPlayerDirectory`] talks to the configured backend
//!   (`/kbo/search`, `/kbo/sync`)
//! - [`DemoPlayerDirectory`] answers in-process from a fixed three-player
//!   roster with a simulated delay
//!
//! [`directory_for`] picks one from [`KboConfig`] once, at startup.

mod config;
mod demo;
mod error;
mod http;
mod traits;
mod types;

use std::sync::Arc;

pub use config::{DemoConfig, KboConfig};
pub use demo::{DEMO_SYNC_MESSAGE, DemoPlayerDirectory, demo_roster};
pub use error::{KboError, Result};
pub use http::HttpPlayerDirectory;
pub use traits::PlayerDirectory;
pub use types::{SearchResponse, SyncOrigin, SyncResponse, SyncResult};

/// Build the directory selected by `config`: remote when a base URL is set,
/// the demo stand-in otherwise.
pub fn directory_for(config: &KboConfig) -> Arc<dyn PlayerDirectory> {
    match config.backend_base() {
        Some(base) => {
            tracing::info!("Using remote player directory at {}", base);
            Arc::new(HttpPlayerDirectory::new(base))
        }
        None => {
            tracing::info!("No backend configured, using demo player directory");
            Arc::new(DemoPlayerDirectory::new(config.demo.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_backend_selects_demo() {
        let config = KboConfig {
            backend_base: Some("   ".to_string()),
            demo: DemoConfig::instant(),
        };
        assert!(directory_for(&config).is_demo());
    }

    #[test]
    fn configured_backend_selects_remote() {
        let config = KboConfig {
            backend_base: Some("http://127.0.0.1:9".to_string()),
            demo: DemoConfig::instant(),
        };
        assert!(!directory_for(&config).is_demo());
    }
}
