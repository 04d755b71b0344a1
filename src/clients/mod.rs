//! Client handles published after a successful readiness check.
//!
//! Once every upstream dependency is confirmed reachable, the gate constructs
//! one handle per logical capability and publishes it into a [`ClientRegistry`]
//! keyed by [`ClientName`]. The registry is owned by the caller: constructed
//! once at startup, populated by the gate, and shared read-only for the
//! lifetime of the process. Consumers retrieve handles by key; after a failed
//! readiness check the registry stays empty and `get` returns `None`.

mod handle;

pub use handle::ClientHandle;

use std::collections::HashMap;
use std::fmt;

/// Closed set of published client capabilities.
///
/// The metadata-bound capabilities share the core-metadata endpoint; `Event`
/// is bound to the core-data endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientName {
    Device,
    DeviceService,
    DeviceProfile,
    ProvisionWatcher,
    Event,
}

impl ClientName {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientName::Device => "device",
            ClientName::DeviceService => "device-service",
            ClientName::DeviceProfile => "device-profile",
            ClientName::ProvisionWatcher => "provision-watcher",
            ClientName::Event => "event",
        }
    }

    /// The capabilities bound to the core-metadata endpoint.
    pub const METADATA_CLIENTS: [ClientName; 4] = [
        ClientName::Device,
        ClientName::DeviceService,
        ClientName::DeviceProfile,
        ClientName::ProvisionWatcher,
    ];
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyed lookup of constructed client handles.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    entries: HashMap<ClientName, ClientHandle>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a handle, overwriting any prior entry for the same key.
    pub fn publish(&mut self, name: ClientName, handle: ClientHandle) {
        self.entries.insert(name, handle);
    }

    pub fn get(&self, name: ClientName) -> Option<&ClientHandle> {
        self.entries.get(&name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
