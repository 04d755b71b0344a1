//! Readiness gate: validate, probe, publish.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::clients::{ClientHandle, ClientName, ClientRegistry};
use crate::config::{
    BootstrapConfig, CORE_DATA_SERVICE_KEY, CORE_METADATA_SERVICE_KEY, REQUIRED_SERVICE_KEYS,
};
use crate::probe::{check_all, strategy_for};
use crate::registry::RegistryClient;

/// Gates the startup of a dependent service on upstream availability.
///
/// The gate validates the required client configuration, runs the concurrent
/// dependency check, and on success constructs and publishes the client
/// handles. The only externally visible result is the boolean verdict;
/// callers cannot distinguish an invalid configuration from a timeout or a
/// cancellation except via logs.
pub struct ReadinessGate {
    config: Arc<BootstrapConfig>,
    registry: Option<Arc<dyn RegistryClient>>,
}

impl ReadinessGate {
    pub fn new(config: Arc<BootstrapConfig>) -> Self {
        Self {
            config,
            registry: None,
        }
    }

    /// Inject a service-registry handle. When present, every prober consults
    /// the registry instead of pinging services directly.
    pub fn with_registry(mut self, registry: Arc<dyn RegistryClient>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Run one readiness check and, on success, publish client handles into
    /// `clients`.
    ///
    /// Configuration is validated first: a missing host or port for any
    /// required service aborts immediately with a logged fatal error and no
    /// probing. On a `false` verdict nothing is published.
    pub async fn initialize(
        &self,
        cancel: &CancellationToken,
        clients: &mut ClientRegistry,
    ) -> bool {
        if let Err(err) = self.config.validate_clients(&REQUIRED_SERVICE_KEYS) {
            error!(error = %err, "client configuration invalid");
            return false;
        }

        let strategy = strategy_for(&self.config, self.registry.clone());
        let ready = check_all(
            cancel,
            &REQUIRED_SERVICE_KEYS,
            &self.config.service.startup,
            strategy,
        )
        .await;
        if !ready {
            return false;
        }

        self.publish_clients(clients);
        info!("service clients initialized");
        true
    }

    fn publish_clients(&self, clients: &mut ClientRegistry) {
        let timeout = self.config.service.request_timeout();

        if let Some(endpoint) = self.config.endpoint(CORE_METADATA_SERVICE_KEY) {
            let url = endpoint.url();
            for name in ClientName::METADATA_CLIENTS {
                clients.publish(name, ClientHandle::new(&url, timeout));
            }
        }

        if let Some(endpoint) = self.config.endpoint(CORE_DATA_SERVICE_KEY) {
            clients.publish(
                ClientName::Event,
                ClientHandle::new(&endpoint.url(), timeout),
            );
        }
    }
}
