//! Service registry client seam.
//!
//! When a registry is configured, availability checks are answered by the
//! registry instead of by pinging each service directly. The registry itself
//! is an external collaborator; this trait is the boundary the prober
//! consumes. Implementations are injected by the host process.

use async_trait::async_trait;

use crate::Result;

#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Whether the registry infrastructure itself is reachable.
    async fn is_alive(&self) -> bool;

    /// Whether the named service is registered and healthy.
    async fn is_service_available(&self, service_key: &str) -> Result<bool>;
}
