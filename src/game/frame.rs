//! Fixed frame cadence

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame's time budget
pub struct FrameLimiter {
    frame_time: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(frame_time: Duration) -> Self {
        Self { frame_time, frame_start: Instant::now() }
    }

    /// Budget left in the current frame at `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame_time.saturating_sub(now.saturating_duration_since(self.frame_start))
    }

    /// Block until the frame budget is used up, then start the next frame
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}
