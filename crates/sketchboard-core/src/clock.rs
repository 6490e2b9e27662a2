//! Time sources for rainbow colouring.

use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time in milliseconds.
pub trait Clock {
    fn now_millis(&self) -> f64;
}

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// A clock frozen at one instant, for reproducible sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn now_millis(&self) -> f64 {
        self.0
    }
}
