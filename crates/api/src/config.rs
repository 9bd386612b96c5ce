//! Process configuration read from the environment.

use std::env;
use std::net::Ipv4Addr;

use thiserror::Error;

/// Port the catalog has always listened on.
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to parse environment variable '{key}': {details}")]
    Parse { key: String, details: String },
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    /// Reads `HOST` (default `0.0.0.0`) and `PORT` (default `4000`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| Ipv4Addr::UNSPECIFIED.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|e| ConfigError::Parse {
                key: "PORT".to_string(),
                details: format!("{e}"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// `host:port`, suitable for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", None::<&str>)], || {
            let config = ApiConfig::from_env().unwrap();
            assert_eq!(config, ApiConfig::default());
            assert_eq!(config.address(), "0.0.0.0:4000");
        });
    }

    #[test]
    fn reads_custom_values() {
        temp_env::with_vars([("HOST", Some("127.0.0.1")), ("PORT", Some("3001"))], || {
            let config = ApiConfig::from_env().unwrap();
            assert_eq!(config.address(), "127.0.0.1:3001");
        });
    }

    #[test]
    fn rejects_invalid_port() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", Some("eighty"))], || {
            let err = ApiConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::Parse { ref key, .. } if key == "PORT"));
        });
    }
}
