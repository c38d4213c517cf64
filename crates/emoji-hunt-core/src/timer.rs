//! Round timer and clock sources.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock; follows tokio's paused clock inside `start_paused` tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when advanced
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }

    pub fn advance_secs_f64(&self, secs: f64) {
        self.advance(Duration::from_secs_f64(secs));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Measures how long the current target has been shown.
#[derive(Clone)]
pub struct RoundTimer {
    clock: Arc<dyn Clock>,
}

impl RoundTimer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Start (or restart) a round, returning its reference instant.
    pub fn start(&self) -> Instant {
        self.clock.now()
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn elapsed_seconds(&self, since: Instant) -> f64 {
        Self::seconds_between(since, self.clock.now())
    }

    /// Seconds from `since` to `until`, zero if `until` is earlier.
    pub fn seconds_between(since: Instant, until: Instant) -> f64 {
        until.saturating_duration_since(since).as_secs_f64()
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_elapsed() {
        let clock = ManualClock::new();
        let timer = RoundTimer::new(Arc::new(clock.clone()));

        let started = timer.start();
        assert_eq!(timer.elapsed_seconds(started), 0.0);

        clock.advance(Duration::from_millis(2500));
        assert_eq!(timer.elapsed_seconds(started), 2.5);
    }

    #[test]
    fn test_restart_resets_reference() {
        let clock = ManualClock::new();
        let timer = RoundTimer::new(Arc::new(clock.clone()));

        let first = timer.start();
        clock.advance(Duration::from_secs(3));
        let second = timer.start();
        clock.advance(Duration::from_secs(1));

        assert_eq!(timer.elapsed_seconds(first), 4.0);
        assert_eq!(timer.elapsed_seconds(second), 1.0);
    }

    #[test]
    fn test_seconds_between_saturates() {
        let clock = ManualClock::new();
        let earlier = clock.now();
        clock.advance(Duration::from_secs(2));
        let later = clock.now();

        assert_eq!(RoundTimer::seconds_between(later, earlier), 0.0);
        assert_eq!(RoundTimer::seconds_between(earlier, later), 2.0);
    }
}
