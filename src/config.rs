//! Bootstrap configuration structures
//!
//! This module contains the configuration consumed by the readiness gate: the
//! per-service client endpoints, the shared request timeout used by ping
//! checks, and the startup timer settings.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::{Error, ErrorContext, Result};

/// Service key for the core metadata service.
pub const CORE_METADATA_SERVICE_KEY: &str = "core-metadata";
/// Service key for the core data service.
pub const CORE_DATA_SERVICE_KEY: &str = "core-data";

/// The upstream services a dependent service must wait for before starting.
pub const REQUIRED_SERVICE_KEYS: [&str; 2] = [CORE_DATA_SERVICE_KEY, CORE_METADATA_SERVICE_KEY];

/// Per-service client endpoint definition.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientEndpoint {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
}

impl ClientEndpoint {
    /// Base URL composed from host and port.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Startup timer settings: total wait duration and poll interval.
#[derive(Debug, Clone, Deserialize)]
pub struct StartupSettings {
    #[serde(default = "default_startup_duration_secs")]
    pub duration_secs: u64,
    #[serde(default = "default_startup_interval_secs")]
    pub interval_secs: u64,
}

impl StartupSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for StartupSettings {
    fn default() -> Self {
        Self {
            duration_secs: default_startup_duration_secs(),
            interval_secs: default_startup_interval_secs(),
        }
    }
}

fn default_startup_duration_secs() -> u64 {
    60
}

fn default_startup_interval_secs() -> u64 {
    1
}

/// Service-wide settings shared by all client probes.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    /// Per-attempt request timeout in milliseconds, applied to each ping.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default)]
    pub startup: StartupSettings,
}

impl ServiceSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn default_request_timeout_ms() -> u64 {
    5000
}

/// Root configuration consumed by the readiness gate.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    /// Client endpoints keyed by service key.
    #[serde(default)]
    pub clients: HashMap<String, ClientEndpoint>,
    pub service: ServiceSettings,
}

impl BootstrapConfig {
    /// Parse a configuration document from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a configuration document from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Look up the endpoint configured for a service key.
    pub fn endpoint(&self, service_key: &str) -> Option<&ClientEndpoint> {
        self.clients.get(service_key)
    }

    /// Validate that every required service key has a usable endpoint.
    ///
    /// Host must be non-empty and port non-zero. The first violation aborts
    /// with a configuration error naming the field and service key; this is a
    /// fail-fast precondition, not part of any retry loop.
    pub fn validate_clients(&self, required: &[&str]) -> Result<()> {
        for key in required {
            let endpoint = self.endpoint(key).ok_or_else(|| {
                Error::configuration_with_context(
                    format!("no client settings configured for {} service", key),
                    ErrorContext::new()
                        .with_field_path(format!("clients.{}", key))
                        .with_source("config_validation"),
                )
            })?;

            if endpoint.host.is_empty() {
                return Err(Error::configuration_with_context(
                    format!("Host setting for {} client not configured", key),
                    ErrorContext::new()
                        .with_field_path(format!("clients.{}.host", key))
                        .with_source("config_validation"),
                ));
            }

            if endpoint.port == 0 {
                return Err(Error::configuration_with_context(
                    format!("Port setting for {} client not configured", key),
                    ErrorContext::new()
                        .with_field_path(format!("clients.{}.port", key))
                        .with_source("config_validation"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_YAML: &str = r#"
clients:
  core-metadata:
    host: meta.local
    port: 59881
  core-data:
    host: data.local
    port: 59880
service:
  request_timeout_ms: 5000
  startup:
    duration_secs: 60
    interval_secs: 1
"#;

    #[test]
    fn test_parse_valid_config() {
        let config = BootstrapConfig::from_yaml_str(VALID_YAML).unwrap();
        assert_eq!(config.clients.len(), 2);
        assert_eq!(
            config.endpoint(CORE_METADATA_SERVICE_KEY).unwrap().port,
            59881
        );
        assert_eq!(config.service.request_timeout(), Duration::from_millis(5000));
        assert_eq!(config.service.startup.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_endpoint_url_composition() {
        let endpoint = ClientEndpoint {
            host: "meta.local".to_string(),
            port: 59881,
        };
        assert_eq!(endpoint.url(), "http://meta.local:59881");
    }

    #[test]
    fn test_startup_defaults_applied() {
        let yaml = r#"
clients:
  core-data:
    host: localhost
    port: 59880
service:
  request_timeout_ms: 3000
"#;
        let config = BootstrapConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.service.startup.duration(), Duration::from_secs(60));
        assert_eq!(config.service.startup.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_validate_accepts_complete_clients() {
        let config = BootstrapConfig::from_yaml_str(VALID_YAML).unwrap();
        assert!(config.validate_clients(&REQUIRED_SERVICE_KEYS).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let mut config = BootstrapConfig::from_yaml_str(VALID_YAML).unwrap();
        config
            .clients
            .get_mut(CORE_METADATA_SERVICE_KEY)
            .unwrap()
            .host
            .clear();

        let err = config
            .validate_clients(&REQUIRED_SERVICE_KEYS)
            .unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("Host"));
        assert!(rendered.contains(CORE_METADATA_SERVICE_KEY));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = BootstrapConfig::from_yaml_str(VALID_YAML).unwrap();
        config
            .clients
            .get_mut(CORE_DATA_SERVICE_KEY)
            .unwrap()
            .port = 0;

        let err = config
            .validate_clients(&REQUIRED_SERVICE_KEYS)
            .unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("Port"));
        assert!(rendered.contains(CORE_DATA_SERVICE_KEY));
    }

    #[test]
    fn test_validate_rejects_missing_client_entry() {
        let yaml = r#"
clients:
  core-data:
    host: localhost
    port: 59880
service:
  request_timeout_ms: 5000
"#;
        let config = BootstrapConfig::from_yaml_str(yaml).unwrap();
        let err = config
            .validate_clients(&REQUIRED_SERVICE_KEYS)
            .unwrap_err();
        assert!(err.to_string().contains(CORE_METADATA_SERVICE_KEY));
    }
}
