use std::net::SocketAddr;

use super::errors::ConfigError;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server settings read from the environment on top of the Leptos options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Overrides the `site-addr` from `[package.metadata.leptos]` when set.
    pub bind_addr: Option<SocketAddr>,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("BIND_ADDR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            Some(value) => Some(
                value
                    .parse::<SocketAddr>()
                    .map_err(|source| ConfigError::InvalidBindAddr { value, source })?,
            ),
            None => None,
        };

        let log_filter = lookup("RUST_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind_addr,
            log_filter,
        })
    }

    pub fn bind_addr_or(&self, fallback: SocketAddr) -> SocketAddr {
        self.bind_addr.unwrap_or(fallback)
    }
}
