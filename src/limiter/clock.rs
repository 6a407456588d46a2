//! Wall clock abstraction for the rate limiter.

use chrono::Utc;

/// Source of the current time, in milliseconds since the Unix epoch.
///
/// Injected into the limiter so tests can drive time manually.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
