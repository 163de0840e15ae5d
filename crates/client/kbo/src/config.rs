//! Player directory configuration.
use std::env;
use std::time::Duration;

/// Selects and tunes the player directory.
#[derive(Clone, Debug, Default)]
pub struct KboConfig {
    /// Backend base URL, e.g. `https://api.example.com`. Unset or blank
    /// selects the demo directory.
    pub backend_base: Option<String>,
    pub demo: DemoConfig,
}

impl KboConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ATHLY_BACKEND_BASE` - Backend base URL (default: unset, demo mode)
    /// - `ATHLY_DEMO_SEARCH_DELAY_MS` - Simulated demo search latency (default: 400)
    /// - `ATHLY_DEMO_SYNC_DELAY_MS` - Simulated demo sync latency (default: 500)
    pub fn from_env() -> Self {
        let mut config = Self {
            backend_base: env::var("ATHLY_BACKEND_BASE").ok(),
            ..Self::default()
        };

        if let Some(ms) = read_env::<u64>("ATHLY_DEMO_SEARCH_DELAY_MS") {
            config.demo.search_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("ATHLY_DEMO_SYNC_DELAY_MS") {
            config.demo.sync_delay = Duration::from_millis(ms);
        }

        config
    }

    /// The configured base URL without surrounding whitespace or a trailing
    /// slash, if one is set.
    pub fn backend_base(&self) -> Option<&str> {
        self.backend_base
            .as_deref()
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
    }
}

/// Simulated latency of the demo directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub search_delay: Duration,
    pub sync_delay: Duration,
}

impl DemoConfig {
    /// No simulated latency.
    pub const fn instant() -> Self {
        Self {
            search_delay: Duration::ZERO,
            sync_delay: Duration::ZERO,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(400),
            sync_delay: Duration::from_millis(500),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_base_is_normalized() {
        let config = KboConfig {
            backend_base: Some(" https://api.example.com/ ".to_string()),
            ..KboConfig::default()
        };
        assert_eq!(config.backend_base(), Some("https://api.example.com"));
    }

    #[test]
    fn blank_backend_base_is_unset() {
        let config = KboConfig {
            backend_base: Some(String::new()),
            ..KboConfig::default()
        };
        assert_eq!(config.backend_base(), None);
        assert_eq!(KboConfig::default().backend_base(), None);
    }
}
