/// Convert a pair of millisecond timestamps into elapsed seconds.
/// Timestamps that run backwards (a frame stamped before `start`) count as zero.
pub fn secs_between(from_ms: f64, to_ms: f64) -> f32 {
    ((to_ms - from_ms).max(0.0) / 1000.0) as f32
}

/// Countdown for a single round.
/// Timestamps come from the host (display-refresh callback or tests), in ms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundClock {
    /// Round budget in seconds.
    duration: f32,
    /// Timestamp recorded at start.
    start_ms: f64,
}

impl RoundClock {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            start_ms: 0.0,
        }
    }

    /// Restart the countdown at `now_ms`.
    pub fn start(&mut self, now_ms: f64) {
        self.start_ms = now_ms;
    }

    /// Seconds since start.
    pub fn elapsed(&self, now_ms: f64) -> f32 {
        secs_between(self.start_ms, now_ms)
    }

    /// Seconds left, clamped at zero.
    pub fn remaining(&self, now_ms: f64) -> f32 {
        (self.duration - self.elapsed(now_ms)).max(0.0)
    }
}
