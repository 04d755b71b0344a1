//! Single-service poll loop.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::error;

use super::strategy::{AvailabilityCheck, AvailabilityOutcome};
use crate::timer::StartupTimer;

/// Terminal state of one service prober.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The service answered an availability check before the deadline.
    Available,
    /// The cancellation token fired before a successful check.
    Cancelled,
    /// The timer ran out without a successful check.
    TimedOut,
    /// The strategy reported a fatal configuration problem; no retries.
    Failed,
}

impl ProbeOutcome {
    pub fn is_available(self) -> bool {
        self == ProbeOutcome::Available
    }
}

/// Poll one service until it is available, the timer elapses, or the check is
/// cancelled.
///
/// Cancellation is observed before each poll attempt; an in-flight check runs
/// to its own timeout even if the token fires mid-call. Between failed
/// attempts the prober sleeps for one poll interval, so the attempt count is
/// bounded by `floor(duration / interval)` without being explicitly counted.
pub async fn probe(
    service_key: &str,
    cancel: &CancellationToken,
    timer: StartupTimer,
    strategy: Arc<dyn AvailabilityCheck>,
) -> ProbeOutcome {
    while timer.has_not_elapsed() {
        if cancel.is_cancelled() {
            error!(service = %service_key, "dependency check cancelled");
            return ProbeOutcome::Cancelled;
        }

        match strategy.check(service_key).await {
            AvailabilityOutcome::Available => return ProbeOutcome::Available,
            AvailabilityOutcome::Unavailable => timer.sleep_for_interval().await,
            AvailabilityOutcome::ConfigError => {
                error!(
                    service = %service_key,
                    "dependency check aborted: invalid client configuration"
                );
                return ProbeOutcome::Failed;
            }
        }
    }

    error!(service = %service_key, "dependency service checking timed out");
    ProbeOutcome::TimedOut
}
