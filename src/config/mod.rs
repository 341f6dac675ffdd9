// Configuration module entry point
// Loads per-service configuration from file, environment and defaults

mod state;
mod types;

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::service::Service;

pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

impl Config {
    /// Load configuration for a service from its default file name
    /// (`accountservice.toml` / `weatherbackend.toml`), which is optional.
    pub fn load(service: Service) -> Result<Self> {
        Self::load_from(service, service.name())
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(service: Service, config_path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(service.env_prefix())
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(service.default_port()))?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 30)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                Error::InvalidAddress(format!("{}:{} ({e})", self.server.host, self.server.port))
            })
    }

    pub fn connection_timeout(&self) -> Option<Duration> {
        match self.performance.connection_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "does/not/exist/service-config";

    #[test]
    fn test_defaults_per_service() {
        let account = Config::load_from(Service::Account, MISSING).unwrap();
        assert_eq!(account.server.port, 6767);
        assert_eq!(account.server.host, "0.0.0.0");
        assert_eq!(account.logging.level, "info");
        assert!(account.logging.access_log);
        assert_eq!(account.http.max_body_size, 1_048_576);

        let weather = Config::load_from(Service::Weather, MISSING).unwrap();
        assert_eq!(weather.server.port, 6768);
        assert!(weather.server.workers.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from(Service::Weather, MISSING).unwrap();
        assert_eq!(cfg.get_socket_addr().unwrap().port(), 6768);

        cfg.server.host = "not an ip".to_string();
        assert!(matches!(cfg.get_socket_addr(), Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn test_connection_timeout() {
        let mut cfg = Config::load_from(Service::Account, MISSING).unwrap();
        assert_eq!(cfg.connection_timeout(), Some(Duration::from_secs(30)));

        cfg.performance.connection_timeout = 0;
        assert_eq!(cfg.connection_timeout(), None);
    }
}
