//! Fan-out/join across all required service keys.

use std::sync::Arc;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::error;

use super::prober::probe;
use super::strategy::AvailabilityCheck;
use crate::config::StartupSettings;
use crate::timer::StartupTimer;

/// Probe every service key concurrently and join the outcomes into one
/// verdict.
///
/// One tokio task per key, each with its own timer built from the shared
/// settings. The join waits for all probers; a failure or cancellation in one
/// does not stop the others from running to their own terminal state. Returns
/// `true` only if every prober ended `Available`.
pub async fn check_all(
    cancel: &CancellationToken,
    service_keys: &[&str],
    startup: &StartupSettings,
    strategy: Arc<dyn AvailabilityCheck>,
) -> bool {
    let handles: Vec<_> = service_keys
        .iter()
        .map(|key| {
            let key = key.to_string();
            let cancel = cancel.clone();
            let strategy = Arc::clone(&strategy);
            let timer = StartupTimer::from_settings(startup);
            tokio::spawn(async move { probe(&key, &cancel, timer, strategy).await })
        })
        .collect();

    let mut all_available = true;
    for result in join_all(handles).await {
        match result {
            Ok(outcome) => all_available &= outcome.is_available(),
            Err(err) => {
                error!(error = %err, "dependency prober task failed");
                all_available = false;
            }
        }
    }
    all_available
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::strategy::AvailabilityOutcome;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    /// Scripted per-key behavior: succeed once the attempt count for a key
    /// reaches its configured threshold (1 = first try), or never for keys
    /// with no entry.
    struct ScriptedCheck {
        succeed_on_attempt: HashMap<String, u32>,
        attempts: Mutex<HashMap<String, u32>>,
        total_calls: AtomicU32,
    }

    impl ScriptedCheck {
        fn new(succeed_on_attempt: &[(&str, u32)]) -> Self {
            Self {
                succeed_on_attempt: succeed_on_attempt
                    .iter()
                    .map(|(k, n)| (k.to_string(), *n))
                    .collect(),
                attempts: Mutex::new(HashMap::new()),
                total_calls: AtomicU32::new(0),
            }
        }

        fn attempts_for(&self, key: &str) -> u32 {
            self.attempts
                .lock()
                .unwrap()
                .get(key)
                .copied()
                .unwrap_or(0)
        }
    }

    #[async_trait]
    impl AvailabilityCheck for ScriptedCheck {
        async fn check(&self, service_key: &str) -> AvailabilityOutcome {
            self.total_calls.fetch_add(1, Ordering::SeqCst);
            let mut attempts = self.attempts.lock().unwrap();
            let count = attempts.entry(service_key.to_string()).or_insert(0);
            *count += 1;
            match self.succeed_on_attempt.get(service_key) {
                Some(threshold) if *count >= *threshold => AvailabilityOutcome::Available,
                _ => AvailabilityOutcome::Unavailable,
            }
        }
    }

    fn settings(duration_secs: u64, interval_secs: u64) -> StartupSettings {
        StartupSettings {
            duration_secs,
            interval_secs,
        }
    }

    #[tokio::test]
    async fn test_all_available_first_attempt() {
        let check = Arc::new(ScriptedCheck::new(&[("core-data", 1), ("core-metadata", 1)]));
        let verdict = check_all(
            &CancellationToken::new(),
            &["core-data", "core-metadata"],
            &settings(5, 1),
            check.clone(),
        )
        .await;

        assert!(verdict);
        assert_eq!(check.attempts_for("core-data"), 1);
        assert_eq!(check.attempts_for("core-metadata"), 1);
    }

    #[tokio::test]
    async fn test_one_service_never_available_fails_verdict() {
        // core-metadata never succeeds; core-data succeeds immediately. The
        // verdict is false but the successful prober still ran exactly once.
        let check = Arc::new(ScriptedCheck::new(&[("core-data", 1)]));
        let verdict = check_all(
            &CancellationToken::new(),
            &["core-data", "core-metadata"],
            &settings(1, 1),
            check.clone(),
        )
        .await;

        assert!(!verdict);
        assert_eq!(check.attempts_for("core-data"), 1);
        assert!(check.attempts_for("core-metadata") >= 1);
    }

    #[tokio::test]
    async fn test_cancelled_check_fails_verdict() {
        let check = Arc::new(ScriptedCheck::new(&[("core-data", 1)]));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let verdict = check_all(&cancel, &["core-data"], &settings(5, 1), check.clone()).await;

        assert!(!verdict);
        assert_eq!(check.total_calls.load(Ordering::SeqCst), 0);
    }
}
