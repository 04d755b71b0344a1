//! Availability strategies.
//!
//! Two interchangeable per-attempt checks: a service-registry lookup and a
//! direct HTTP ping. The strategy is selected once per readiness check based
//! on whether a registry handle is configured; every prober in that check
//! uses the same strategy.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};
use url::Url;

use crate::config::BootstrapConfig;
use crate::registry::RegistryClient;

/// Health route probed by the ping strategy.
pub const PING_ROUTE: &str = "/api/v2/ping";

/// Per-attempt outcome of an availability check.
///
/// `Unavailable` is transient and keeps the prober polling; `ConfigError` is
/// fatal and terminates the prober without further retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityOutcome {
    Available,
    Unavailable,
    ConfigError,
}

/// One availability check attempt for a single service key.
#[async_trait]
pub trait AvailabilityCheck: Send + Sync {
    async fn check(&self, service_key: &str) -> AvailabilityOutcome;
}

/// Answers availability questions through the service registry.
pub struct RegistryCheck {
    registry: Arc<dyn RegistryClient>,
}

impl RegistryCheck {
    pub fn new(registry: Arc<dyn RegistryClient>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl AvailabilityCheck for RegistryCheck {
    async fn check(&self, service_key: &str) -> AvailabilityOutcome {
        info!(service = %service_key, "checking service status via registry");

        if !self.registry.is_alive().await {
            // Registry infrastructure down: retried on the same path as an
            // unavailable service, but logged distinctly.
            error!(
                service = %service_key,
                "unable to check service status: registry not running"
            );
            return AvailabilityOutcome::Unavailable;
        }

        match self.registry.is_service_available(service_key).await {
            Ok(true) => AvailabilityOutcome::Available,
            Ok(false) => {
                error!(service = %service_key, "service not registered or unhealthy");
                AvailabilityOutcome::Unavailable
            }
            Err(err) => {
                error!(service = %service_key, error = %err, "registry availability query failed");
                AvailabilityOutcome::Unavailable
            }
        }
    }
}

/// Answers availability questions with a bounded HTTP GET on the ping route.
///
/// The HTTP client is built once per readiness check; the shared per-attempt
/// timeout is applied to each request rather than cumulatively across retries.
pub struct PingCheck {
    endpoints: HashMap<String, String>,
    client: reqwest::Client,
    timeout: Duration,
}

impl PingCheck {
    pub fn new(config: &BootstrapConfig) -> Self {
        let endpoints = config
            .clients
            .iter()
            .map(|(key, endpoint)| (key.clone(), endpoint.url()))
            .collect();
        Self {
            endpoints,
            client: reqwest::Client::new(),
            timeout: config.service.request_timeout(),
        }
    }
}

#[async_trait]
impl AvailabilityCheck for PingCheck {
    async fn check(&self, service_key: &str) -> AvailabilityOutcome {
        info!(service = %service_key, "checking service status by ping");

        let Some(base_url) = self.endpoints.get(service_key) else {
            error!(service = %service_key, "no client endpoint configured for service");
            return AvailabilityOutcome::ConfigError;
        };

        let ping_url = match Url::parse(base_url).and_then(|base| base.join(PING_ROUTE)) {
            Ok(url) => url,
            Err(err) => {
                error!(
                    service = %service_key,
                    url = %base_url,
                    error = %err,
                    "client endpoint is not a valid URL"
                );
                return AvailabilityOutcome::ConfigError;
            }
        };

        match self.client.get(ping_url).timeout(self.timeout).send().await {
            Ok(response) if response.status().is_success() => AvailabilityOutcome::Available,
            Ok(response) => {
                error!(
                    service = %service_key,
                    status = %response.status(),
                    "ping returned non-success status"
                );
                AvailabilityOutcome::Unavailable
            }
            Err(err) => {
                error!(service = %service_key, error = %err, "ping request failed");
                AvailabilityOutcome::Unavailable
            }
        }
    }
}

/// Select the strategy for one readiness check.
///
/// A configured registry handle means every prober consults the registry;
/// otherwise every prober pings its service directly. Mixed strategies within
/// one check are not supported.
pub fn strategy_for(
    config: &BootstrapConfig,
    registry: Option<Arc<dyn RegistryClient>>,
) -> Arc<dyn AvailabilityCheck> {
    match registry {
        Some(registry) => Arc::new(RegistryCheck::new(registry)),
        None => Arc::new(PingCheck::new(config)),
    }
}
