//! Time source for the session gate.

use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// The session gate compares against `now()`; tests swap in a manual clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
