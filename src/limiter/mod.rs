//! Conversion rate limiting.
//!
//! Enforces a fixed cooldown between successful split operations, scoped to
//! one user profile. The only state is the timestamp of the last successful
//! conversion, held in a single persistent slot. Store and clock are
//! injected, so tests run against an in-memory slot and a manual clock.
//!
//! There is no cross-process locking: two concurrent invocations can both
//! observe an expired cooldown before either records. Accepted for the
//! single-user usage this tool targets.

mod clock;
mod store;

pub use clock::{Clock, SystemClock};
pub use store::{FileStore, MemoryStore, StateStore, StoreError, STORAGE_KEY};

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

/// Cooldown window between successful conversions.
pub const COOLDOWN_DURATION: Duration = Duration::from_secs(5 * 60);

/// Outcome of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLimitStatus {
    /// Whether a new conversion may proceed.
    pub allowed: bool,
    /// Remaining wait in milliseconds; zero when allowed.
    pub remaining_ms: i64,
    /// Timestamp of the last recorded conversion, if any.
    pub last_conversion: Option<i64>,
}

/// Gate for split operations.
pub struct RateLimiter<S, C = SystemClock> {
    store: S,
    clock: C,
    cooldown: Duration,
}

impl<S: StateStore> RateLimiter<S> {
    /// Limiter over `store` with the system clock and the fixed cooldown.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: StateStore, C: Clock> RateLimiter<S, C> {
    /// Limiter with an explicit clock.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            cooldown: COOLDOWN_DURATION,
        }
    }

    /// Checks whether a new conversion is currently allowed.
    ///
    /// An empty slot always allows. Otherwise the conversion is allowed once
    /// the cooldown has fully elapsed since the recorded timestamp.
    pub fn check(&self) -> Result<RateLimitStatus, StoreError> {
        let Some(last) = self.store.load()? else {
            return Ok(RateLimitStatus {
                allowed: true,
                remaining_ms: 0,
                last_conversion: None,
            });
        };

        let elapsed = self.clock.now_ms() - last;
        let remaining = self.cooldown.as_millis() as i64 - elapsed;

        if remaining <= 0 {
            Ok(RateLimitStatus {
                allowed: true,
                remaining_ms: 0,
                last_conversion: Some(last),
            })
        } else {
            debug!(remaining_ms = remaining, "conversion blocked by cooldown");
            Ok(RateLimitStatus {
                allowed: false,
                remaining_ms: remaining,
                last_conversion: Some(last),
            })
        }
    }

    /// Records a successful conversion at the current time.
    ///
    /// Call exactly once per successful split, after the outputs are
    /// persisted. Failed attempts must not be recorded.
    pub fn record(&mut self) -> Result<(), StoreError> {
        let now = self.clock.now_ms();
        self.store.save(now)
    }

    /// Clears the recorded timestamp. Administrative path, not part of the
    /// ordinary split flow.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.store.clear()
    }
}

/// Formats a remaining wait as `"4m 32s"`, or `"45s"` under a minute.
///
/// Seconds are ceiling-rounded so a wait never displays as zero while the
/// cooldown is still active.
pub fn format_remaining_time(milliseconds: i64) -> String {
    let total_seconds = (milliseconds.max(0) + 999) / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
