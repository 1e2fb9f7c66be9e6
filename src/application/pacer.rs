use std::time::{Duration, Instant};

/// Fixed-timestep limiter: sleeps until the next tick boundary.
///
/// Only caps the tick rate. A tick that overruns its budget is not made
/// up for later; the next interval simply starts when it finishes.
pub struct Pacer {
    interval: Duration,
    tick_start: Instant,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            tick_start: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left in the current tick as seen at `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.tick_start))
    }

    /// Block until the current tick's budget is spent, then start the next tick.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.tick_start = Instant::now();
    }
}
