use instant::Instant;
use std::time::Duration;

/// Lets an action through only when `interval` has passed since the last
/// action it let through. Shared by the tone limiter, pointer debounce and
/// frame pacing.
#[derive(Clone, Debug)]
pub struct MinIntervalGate {
    interval: Duration,
    last: Option<Instant>,
}

impl MinIntervalGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true and stamps `now` if the gate is open.
    pub fn try_pass(&mut self, now: Instant) -> bool {
        if self.is_open(now) {
            self.last = Some(now);
            true
        } else {
            false
        }
    }

    pub fn is_open(&self, now: Instant) -> bool {
        match self.last {
            None => true,
            // a clock that went backwards keeps the gate shut
            Some(last) if now < last => false,
            Some(last) => now - last >= self.interval,
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
