//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Paces a render loop to a target frame rate and reports the real one.
pub struct FrameClock {
    frame_budget: Duration,
    started: Instant,
    last_frame: Instant,
}

impl FrameClock {
    /// Create a clock targeting `fps` frames per second (at least 1).
    pub fn new(fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame_budget: Duration::from_millis(1000 / u64::from(fps.max(1))),
            started: now,
            last_frame: now,
        }
    }

    /// Sleep out the rest of the frame budget, then return the time since
    /// the previous call.
    pub fn tick(&mut self) -> Duration {
        if let Some(wait) = time_to_wait(self.frame_budget, self.last_frame.elapsed()) {
            std::thread::sleep(wait);
        }

        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        delta
    }

    /// Time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// How long to sleep so a frame that took `spent` fills `budget`.
///
/// `None` when the frame already used its whole budget.
pub fn time_to_wait(budget: Duration, spent: Duration) -> Option<Duration> {
    budget.checked_sub(spent).filter(|wait| !wait.is_zero())
}

/// Frames per second for a frame that took `delta`.
pub fn fps(delta: Duration) -> f64 {
    let secs = delta.as_secs_f64();
    if secs > 0.0 {
        1.0 / secs
    } else {
        f64::INFINITY
    }
}
