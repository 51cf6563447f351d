//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Default bind address.
const DEFAULT_ADDR: &str = "127.0.0.1:8790";

/// Default city named in status messages.
const DEFAULT_CITY: &str = "Ranchi";

/// Default resolved-alert counter.
const DEFAULT_RESOLVED_COUNT: u32 = 18;

/// Dashboard server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// City named in the status message.
    pub city_name: String,
    /// Resolved-alert counter supplied by external bookkeeping.
    pub resolved_count: u32,
    /// Whether to load the demo alerts at startup.
    pub seed_demo_alerts: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `DASHBOARD_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `CITY_NAME` | City shown in status messages | `Ranchi` |
    /// | `RESOLVED_COUNT` | Resolved-alert counter | `18` |
    /// | `SEED_DEMO_ALERTS` | Load the demo alerts (`true`/`false`) | `true` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("DASHBOARD_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let city_name = lookup("CITY_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_CITY.to_string());

        let resolved_count = match lookup("RESOLVED_COUNT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidResolvedCount(raw))?,
            None => DEFAULT_RESOLVED_COUNT,
        };

        let seed_demo_alerts = match lookup("SEED_DEMO_ALERTS") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidSeedFlag(raw))?,
            None => true,
        };

        Ok(Self {
            addr,
            city_name,
            resolved_count,
            seed_demo_alerts,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid DASHBOARD_ADDR format")]
    InvalidAddr,

    #[error("RESOLVED_COUNT must be a non-negative integer, got {0:?}")]
    InvalidResolvedCount(String),

    #[error("SEED_DEMO_ALERTS must be true or false, got {0:?}")]
    InvalidSeedFlag(String),
}
