//! Server configuration from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8000;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_format: LogFormat::Json,
        }
    }
}

impl ServerConfig {
    /// Read `MANNA_HOST`, `MANNA_PORT` and `MANNA_LOG_FORMAT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("MANNA_HOST")
            .and_then(|h| h.parse().ok())
            .unwrap_or(defaults.host);

        let port = lookup("MANNA_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let log_format = match lookup("MANNA_LOG_FORMAT").as_deref() {
            Some("pretty") => LogFormat::Pretty,
            _ => defaults.log_format,
        };

        Self {
            host,
            port,
            log_format,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn reads_variables() {
        let config = config(&[
            ("MANNA_HOST", "127.0.0.1"),
            ("MANNA_PORT", "3000"),
            ("MANNA_LOG_FORMAT", "pretty"),
        ]);
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config(&[
            ("MANNA_HOST", "not a host"),
            ("MANNA_PORT", "99999"),
            ("MANNA_LOG_FORMAT", "xml"),
        ]);
        assert_eq!(config, ServerConfig::default());
    }
}
