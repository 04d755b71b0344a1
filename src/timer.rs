//! Startup timer: a deadline plus a poll interval.
//!
//! Each prober owns its own instance, built from the shared startup settings.
//! The timer captures a monotonic start instant and is only queried afterward;
//! independent elapsed-time tracking per worker means no prober can interfere
//! with another's deadline.

use std::time::{Duration, Instant};

use crate::config::StartupSettings;

#[derive(Debug, Clone)]
pub struct StartupTimer {
    start: Instant,
    duration: Duration,
    interval: Duration,
}

impl StartupTimer {
    /// Start a timer with the given total wait duration and poll interval.
    pub fn new(duration: Duration, interval: Duration) -> Self {
        Self {
            start: Instant::now(),
            duration,
            interval,
        }
    }

    pub fn from_settings(settings: &StartupSettings) -> Self {
        Self::new(settings.duration(), settings.interval())
    }

    /// Whether the deadline has not yet been reached.
    pub fn has_not_elapsed(&self) -> bool {
        self.start.elapsed() < self.duration
    }

    /// Time left until the deadline.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.start.elapsed())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleep for one poll interval, capped at the remaining budget so a
    /// sleep never extends past the deadline.
    pub async fn sleep_for_interval(&self) {
        tokio::time::sleep(self.interval.min(self.remaining())).await;
    }
}
