//! Pacing between sweeps

use std::time::Duration;

/// Pause between two enforcement sweeps (300 ms)
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);

/// Source of the pause between sweeps
pub trait Ticker {
    /// Block until the next sweep is due
    fn wait(&mut self);
}

/// Sleeps the calling thread for a fixed interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTicker {
    interval: Duration,
}

impl IntervalTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl Ticker for IntervalTicker {
    fn wait(&mut self) {
        std::thread::sleep(self.interval);
    }
}
