//! Relay configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub bind_addr: String,
    pub port: u16,
    pub timeouts: RelayTimeouts,
    pub user_agent: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            timeouts: RelayTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            user_agent: default_user_agent(),
        }
    }
}

impl RelayConfig {
    /// Build typed relay config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `RELAY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `RELAY_CONNECT_TIMEOUT_SECS`: default 10
    /// - `RELAY_USER_AGENT`: default `docview-relay/<version>`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`RelayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let port = parse_or("PORT", lookup("PORT"), defaults.port)?;
        let bind_addr = lookup("BIND_ADDR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.bind_addr);
        let timeouts = RelayTimeouts {
            request_secs: parse_or(
                "RELAY_REQUEST_TIMEOUT_SECS",
                lookup("RELAY_REQUEST_TIMEOUT_SECS"),
                defaults.timeouts.request_secs,
            )?,
            connect_secs: parse_or(
                "RELAY_CONNECT_TIMEOUT_SECS",
                lookup("RELAY_CONNECT_TIMEOUT_SECS"),
                defaults.timeouts.connect_secs,
            )?,
        };
        let user_agent = lookup("RELAY_USER_AGENT").unwrap_or(defaults.user_agent);

        Ok(Self { bind_addr, port, timeouts, user_agent })
    }

    /// `host:port` string for the listener.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn default_user_agent() -> String {
    format!("docview-relay/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
