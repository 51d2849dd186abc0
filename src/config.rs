use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8005,
        }
    }
}

/// Cart and payment service endpoints
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub cart_url: String,
    pub payment_url: String,
    /// Per-call timeout for every outbound request
    pub timeout_ms: u64,
    pub currency: String,
    /// Payment source token sent with every charge
    pub payment_source: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            cart_url: "http://cart-service-python:8003".to_string(),
            payment_url: "http://payment-service-python:8004".to_string(),
            timeout_ms: 10_000,
            currency: "USD".to_string(),
            payment_source: "demo-source".to_string(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_defaults_apply() {
        let cfg = AppConfig::from_yaml_str(
            r#"
log_level: info
log_dir: ./logs
log_file: order-service.log
use_json: false
rotation: daily
"#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8005);
        assert_eq!(cfg.upstream.currency, "USD");
        assert_eq!(cfg.upstream.payment_source, "demo-source");
        assert_eq!(cfg.upstream.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_upstream_overrides() {
        let cfg = AppConfig::from_yaml_str(
            r#"
log_level: debug
log_dir: ./logs
log_file: order-service.log
use_json: true
rotation: never
server:
  host: 127.0.0.1
  port: 9000
upstream:
  cart_url: http://localhost:8003
  payment_url: http://localhost:8004
  timeout_ms: 250
  currency: EUR
  payment_source: tok_test
"#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.upstream.cart_url, "http://localhost:8003");
        assert_eq!(cfg.upstream.timeout(), Duration::from_millis(250));
        assert_eq!(cfg.upstream.currency, "EUR");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = AppConfig::load("does-not-exist").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = AppConfig::from_yaml_str("log_level: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
