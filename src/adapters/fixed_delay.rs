use std::time::Duration;

use crate::ports::Throttle;

/// Sleeps for a constant interval on every pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    interval: Duration,
}

impl FixedDelay {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Throttle for FixedDelay {
    fn pause(&self) {
        if self.interval.is_zero() {
            return;
        }
        tracing::debug!(secs = self.interval.as_secs_f64(), "pausing before next repository");
        std::thread::sleep(self.interval);
    }
}
