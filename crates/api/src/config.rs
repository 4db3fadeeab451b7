//! API configuration.

use common::{DatabaseConfig, ServiceConfig};

/// Everything the HTTP server needs at startup.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }

    /// Override the bind address, e.g. from command line flags.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_bind_overrides_only_given_values() {
        let config = ApiConfig::default().with_bind(None, Some(80));

        assert_eq!(config.service.host, "0.0.0.0");
        assert_eq!(config.service.port, 80);
        assert_eq!(config.service.addr(), "0.0.0.0:80");
    }

    #[test]
    fn with_bind_overrides_host() {
        let config = ApiConfig::default().with_bind(Some("127.0.0.1".to_string()), None);

        assert_eq!(config.service.addr(), "127.0.0.1:8000");
    }
}
