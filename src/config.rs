//! MEMLOG - Server Configuration
//! Defines tunable parameters for the HTTP front end.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::server::ServerError;

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "HTTP_PLATFORM_PORT";

/// Environment variable holding the listen address.
pub const HOST_ENV: &str = "MEMLOG_HOST";

/// Environment variable holding the number of pre-allocated record slots.
pub const CAPACITY_ENV: &str = "MEMLOG_CAPACITY";

/// Configuration for the memlog HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: IpAddr,

    /// TCP port to listen on.
    pub port: u16,

    /// Number of record slots to pre-allocate in the log.
    pub initial_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            initial_capacity: 0,
        }
    }
}

impl ServerConfig {
    /// Build a config from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup(PORT_ENV) {
            config.port = port.trim().parse().map_err(|e| {
                ServerError::Config(format!("invalid {} {:?}: {}", PORT_ENV, port, e))
            })?;
        }

        if let Some(host) = lookup(HOST_ENV) {
            config.host = host.trim().parse().map_err(|e| {
                ServerError::Config(format!("invalid {} {:?}: {}", HOST_ENV, host, e))
            })?;
        }

        if let Some(capacity) = lookup(CAPACITY_ENV) {
            config.initial_capacity = capacity.trim().parse().map_err(|e| {
                ServerError::Config(format!("invalid {} {:?}: {}", CAPACITY_ENV, capacity, e))
            })?;
        }

        Ok(config)
    }

    /// Set the listen port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the listen address.
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Set the number of pre-allocated record slots.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// The socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_port_from_env() {
        let config = ServerConfig::from_lookup(lookup(&[(PORT_ENV, "9000")])).unwrap();
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_host_from_env() {
        let config = ServerConfig::from_lookup(lookup(&[(HOST_ENV, "127.0.0.1")])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_capacity_from_env() {
        let config = ServerConfig::from_lookup(lookup(&[(CAPACITY_ENV, "1024")])).unwrap();
        assert_eq!(config.initial_capacity, 1024);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_ENV, "http")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().contains(PORT_ENV));
    }

    #[test]
    fn test_builders() {
        let config = ServerConfig::default()
            .with_port(1234)
            .with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .with_initial_capacity(64);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:1234");
        assert_eq!(config.initial_capacity, 64);
    }
}
