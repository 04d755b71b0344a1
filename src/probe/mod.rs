//! Dependency-readiness probing.
//!
//! One prober per upstream service runs an availability strategy in a retry
//! loop under its own [`StartupTimer`](crate::timer::StartupTimer) and a
//! shared cancellation token. The coordinator fans the fixed service-key list
//! out to concurrent probers and joins their outcomes into one verdict.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`strategy`] | Per-attempt availability checks (registry lookup or HTTP ping) |
//! | [`prober`] | Single-service poll loop and its terminal outcomes |
//! | [`coordinator`] | Fan-out/join across all required service keys |

pub mod coordinator;
pub mod prober;
pub mod strategy;

pub use coordinator::check_all;
pub use prober::{probe, ProbeOutcome};
pub use strategy::{
    strategy_for, AvailabilityCheck, AvailabilityOutcome, PingCheck, RegistryCheck, PING_ROUTE,
};
