/// Card flip timeline played while a pick is in flight
use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// A single flip: the card turns edge-on halfway through, which is when
/// the new movie is swapped in.
#[derive(Debug, Clone, Copy)]
pub struct Spin {
    started: Option<Instant>,
    duration: Duration,
}

impl Spin {
    pub fn new(duration: Duration) -> Self {
        Spin { started: None, duration }
    }

    /// Start (or restart) the flip at `now`
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    pub fn stop(&mut self) {
        self.started = None;
    }

    /// Progress in `0.0..=1.0`, or `None` when no flip is running
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let started = self.started?;
        if self.duration.is_zero() {
            return None;
        }

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            return None;
        }
        Some(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now).is_some()
    }

    /// Horizontal scale of the card, `|cos(π·p)|`
    pub fn scale(&self, now: Instant) -> f32 {
        match self.progress(now) {
            Some(p) => (PI * p).cos().abs(),
            None => 1.0,
        }
    }
}
