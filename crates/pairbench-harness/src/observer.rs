//! Progress notification for benchmark runs.
//!
//! Observers are called outside the timed region, so their cost never shows
//! up in the measurements.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::sink::SummaryRow;

/// Receives progress events from the runner.
pub trait ProgressObserver {
    /// A run named `name` is about to perform `total` timed repetitions.
    fn on_start(&self, _name: &str, _total: u64) {}

    /// `done` of `total` repetitions have been started.
    fn on_progress(&self, done: u64, total: u64);

    /// One input size has been summarised and written.
    fn on_size_complete(&self, _row: &SummaryRow) {}

    /// The run has finished and its sink is closed.
    fn on_finish(&self, _name: &str) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpObserver;

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _done: u64, _total: u64) {}
}

/// Logs progress through `tracing`, at most once per `step_percent` of the
/// run.
#[derive(Debug)]
pub struct LoggingObserver {
    step_percent: u64,
    last_percent: AtomicU64,
}

impl LoggingObserver {
    #[must_use]
    pub fn new(step_percent: u64) -> Self {
        Self {
            step_percent: step_percent.clamp(1, 100),
            last_percent: AtomicU64::new(0),
        }
    }

    fn percent(done: u64, total: u64) -> u64 {
        if total == 0 {
            return 100;
        }
        u64::try_from(u128::from(done) * 100 / u128::from(total)).unwrap_or(100)
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_start(&self, name: &str, total: u64) {
        self.last_percent.store(0, Ordering::Relaxed);
        info!(name, total, "Running {name} tests...");
    }

    fn on_progress(&self, done: u64, total: u64) {
        let percent = Self::percent(done, total);
        let last = self.last_percent.load(Ordering::Relaxed);
        if percent >= last + self.step_percent {
            self.last_percent.store(percent, Ordering::Relaxed);
            info!(done, total, "{percent}% of repetitions started");
        }
    }

    fn on_size_complete(&self, row: &SummaryRow) {
        debug!(n = row.n, mean = row.summary.mean, "size complete");
    }

    fn on_finish(&self, name: &str) {
        info!(name, "{name} done!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<(u64, u64)>>,
    }

    impl ProgressObserver for Recorder {
        fn on_progress(&self, done: u64, total: u64) {
            self.events.borrow_mut().push((done, total));
        }
    }

    #[test]
    fn default_hooks_are_optional() {
        let rec = Recorder::default();
        rec.on_start("x", 2);
        rec.on_progress(1, 2);
        rec.on_finish("x");
        assert_eq!(*rec.events.borrow(), vec![(1, 2)]);
    }

    #[test]
    fn percent_handles_extremes() {
        assert_eq!(LoggingObserver::percent(0, 0), 100);
        assert_eq!(LoggingObserver::percent(1, 4), 25);
        assert_eq!(LoggingObserver::percent(u64::MAX, u64::MAX), 100);
    }

    #[test]
    fn logging_observer_throttles() {
        let obs = LoggingObserver::new(50);
        obs.on_start("t", 100);
        obs.on_progress(10, 100);
        assert_eq!(obs.last_percent.load(Ordering::Relaxed), 0);
        obs.on_progress(55, 100);
        assert_eq!(obs.last_percent.load(Ordering::Relaxed), 55);
        obs.on_progress(100, 100);
        assert_eq!(obs.last_percent.load(Ordering::Relaxed), 55);
    }

    #[test]
    fn step_is_clamped() {
        assert_eq!(LoggingObserver::new(0).step_percent, 1);
        assert_eq!(LoggingObserver::new(500).step_percent, 100);
    }
}
