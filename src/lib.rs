//! # readygate
//!
//! Dependency-readiness gate for service startup. The crate blocks a dependent
//! service's initialization until a fixed set of upstream services are
//! confirmed reachable, then publishes ready-to-use client handles for those
//! services into a shared registry.
//!
//! ## Overview
//!
//! The core is a bounded-time, concurrent polling mechanism: one prober per
//! upstream service, each driven by its own [`StartupTimer`] and one of two
//! interchangeable availability strategies (a service-registry lookup or a
//! direct HTTP ping). A check completes, times out, or is cancelled cleanly;
//! the only externally visible result is a single go/no-go boolean.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use readygate::{BootstrapConfig, ClientRegistry, ReadinessGate};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> readygate::Result<()> {
//!     let config = Arc::new(BootstrapConfig::from_yaml_file("configuration.yaml")?);
//!     let cancel = CancellationToken::new();
//!     let mut clients = ClientRegistry::new();
//!
//!     let gate = ReadinessGate::new(config);
//!     if gate.initialize(&cancel, &mut clients).await {
//!         // Upstream services are reachable; handles are published.
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Bootstrap configuration structures and YAML loading |
//! | [`gate`] | Readiness gate: validation, probing, client publication |
//! | [`probe`] | Concurrent probers, availability strategies, coordinator |
//! | [`timer`] | Deadline + poll-interval timer owned by each prober |
//! | [`registry`] | Injected service-registry client seam |
//! | [`clients`] | Published client handles and their keyed registry |

pub mod clients;
pub mod config;
pub mod gate;
pub mod probe;
pub mod registry;
pub mod timer;

// Re-export main types for convenience
pub use clients::{ClientHandle, ClientName, ClientRegistry};
pub use config::{BootstrapConfig, ClientEndpoint, ServiceSettings, StartupSettings};
pub use gate::ReadinessGate;
pub use probe::{AvailabilityCheck, AvailabilityOutcome, ProbeOutcome};
pub use registry::RegistryClient;
pub use timer::StartupTimer;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
